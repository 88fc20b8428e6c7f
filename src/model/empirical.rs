use super::ClusterProbabilityModel;
use itertools::Itertools;

/// Flat kernel: one probability per distinct value, its share of the cluster
#[derive(Debug, Clone, Copy, Default)]
pub struct EmpiricalFrequencyModel;

impl ClusterProbabilityModel for EmpiricalFrequencyModel {
    fn item_probabilities(&self, sorted: &[f64]) -> Vec<f64> {
        let n = sorted.len() as f64;

        sorted
            .iter()
            .dedup_with_count()
            .map(|(count, _)| count as f64 / n)
            .collect()
    }

    fn name(&self) -> &'static str {
        "empirical"
    }
}
