mod empirical;
mod gaussian;


pub use empirical::EmpiricalFrequencyModel;
pub use gaussian::GaussianKernelModel;

use crate::enumerator::EnumeratorError;
use serde::{Deserialize, Serialize};

/// Core trait for turning a cluster into a probability distribution
pub trait ClusterProbabilityModel: Send + Sync {
    /// Distribution whose entropy scores the cluster
    ///
    /// # Arguments
    /// * `sorted` - Raw cluster values, ascending, duplicates included
    ///
    /// # Returns
    /// Non-negative probabilities summing to 1
    fn item_probabilities(&self, sorted: &[f64]) -> Vec<f64>;

    /// Short name used in reports
    fn name(&self) -> &'static str;
}

/// Serializable selection of a probability model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelConfig {
    /// Relative frequency of each distinct value
    #[default]
    Empirical,
    /// Gaussian kernel around the cluster mean
    Gaussian {
        #[serde(default = "default_norm")]
        norm: f64,
    },
}

fn default_norm() -> f64 {
    GaussianKernelModel::DEFAULT_NORM
}

impl ModelConfig {
    /// Instantiate the configured model
    pub fn build(&self) -> Result<Box<dyn ClusterProbabilityModel>, EnumeratorError> {
        match *self {
            ModelConfig::Empirical => Ok(Box::new(EmpiricalFrequencyModel)),
            ModelConfig::Gaussian { norm } => Ok(Box::new(GaussianKernelModel::new(norm)?)),
        }
    }
}
