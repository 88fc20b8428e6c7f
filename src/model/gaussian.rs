use super::ClusterProbabilityModel;
use crate::enumerator::EnumeratorError;
use crate::partition::mean;

/// Gaussian kernel: each element weighted by `exp(-|x - mean|^norm)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernelModel {
    norm: f64,
}

impl GaussianKernelModel {
    /// L1 distance to the mean
    pub const DEFAULT_NORM: f64 = 1.0;

    /// Create a kernel with the given norm exponent (1 for L1, 2 for L2)
    pub fn new(norm: f64) -> Result<Self, EnumeratorError> {
        if !norm.is_finite() || norm <= 0.0 {
            return Err(EnumeratorError::InvalidModel(format!(
                "norm exponent must be finite and positive, got {}",
                norm
            )));
        }
        Ok(Self { norm })
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }
}

impl Default for GaussianKernelModel {
    fn default() -> Self {
        Self {
            norm: Self::DEFAULT_NORM,
        }
    }
}

impl ClusterProbabilityModel for GaussianKernelModel {
    fn item_probabilities(&self, sorted: &[f64]) -> Vec<f64> {
        let Some(center) = mean(sorted) else {
            return Vec::new();
        };
        let weights: Vec<f64> = sorted
            .iter()
            .map(|x| (-(x - center).abs().powf(self.norm)).exp())
            .collect();

        let total: f64 = weights.iter().sum();
        if total == 0.0 {
            // Every weight underflowed: fall back to uniform
            let uniform = 1.0 / sorted.len() as f64;
            return vec![uniform; sorted.len()];
        }

        weights.into_iter().map(|w| w / total).collect()
    }

    fn name(&self) -> &'static str {
        "gaussian"
    }
}
