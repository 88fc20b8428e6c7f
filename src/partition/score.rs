use super::stats::{population_std_dev, shannon_entropy_bits};
use super::types::{Partition, ScoredPartition};
use crate::dataset::DistinctValue;
use crate::model::ClusterProbabilityModel;

/// Entropy contribution of one sorted cluster
///
/// A cluster holding a single distinct value is pure and scores 0 without
/// consulting the model.
pub fn cluster_entropy(sorted: &[f64], model: &dyn ClusterProbabilityModel) -> f64 {
    match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) if first != last => {
            shannon_entropy_bits(&model.item_probabilities(sorted))
        }
        _ => 0.0,
    }
}

/// Dispersion contribution of one cluster
pub fn cluster_dispersion(values: &[f64]) -> f64 {
    population_std_dev(values)
}

impl ScoredPartition {
    /// Score a canonical partition
    ///
    /// Sums run over clusters in canonical order, so any labelling of the
    /// same grouping produces bit-identical scores.
    pub fn new(partition: Partition, model: &dyn ClusterProbabilityModel) -> Self {
        let entropy: f64 = partition
            .clusters()
            .iter()
            .map(|cluster| cluster_entropy(cluster, model))
            .sum();
        let dispersion: f64 = partition
            .clusters()
            .iter()
            .map(|cluster| cluster_dispersion(cluster))
            .sum();

        Self {
            partition,
            entropy,
            dispersion,
        }
    }
}

/// Build and score the partition implied by `code`
pub fn score_code(
    code: &[usize],
    distinct: &[DistinctValue],
    model: &dyn ClusterProbabilityModel,
) -> ScoredPartition {
    ScoredPartition::new(Partition::from_code(code, distinct), model)
}
