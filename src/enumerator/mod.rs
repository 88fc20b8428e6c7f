mod error;


pub use error::EnumeratorError;

use crate::codes::{surjection_count, surjective_codes, Code};
use crate::dataset::{DataSet, DistinctValue};
use crate::model::{ClusterProbabilityModel, ModelConfig};
use crate::partition::{score_code, ScoredPartition};
use std::collections::HashSet;

/// Immutable enumerator over every partition of a data set
pub struct Enumerator {
    data: DataSet,
    distinct: Vec<DistinctValue>,
    model: Box<dyn ClusterProbabilityModel>,
}

/// Builder for configuring an enumerator
pub struct EnumeratorBuilder {
    data: Vec<f64>,
    model: ModelConfig,
    max_distinct: usize,
}

impl EnumeratorBuilder {
    /// Largest distinct-value count accepted by default (`Σ k^D` codes)
    pub const DEFAULT_MAX_DISTINCT: usize = 8;

    /// Create a builder for the reference data set and the empirical model
    pub fn new() -> Self {
        Self {
            data: DataSet::default().values().to_vec(),
            model: ModelConfig::default(),
            max_distinct: Self::DEFAULT_MAX_DISTINCT,
        }
    }

    /// Set the values to partition
    pub fn data(mut self, data: impl Into<Vec<f64>>) -> Self {
        self.data = data.into();
        self
    }

    /// Set the probability model used for entropy
    pub fn model(mut self, model: ModelConfig) -> Self {
        self.model = model;
        self
    }

    /// Set the maximum number of distinct values
    pub fn max_distinct(mut self, max: usize) -> Self {
        self.max_distinct = max;
        self
    }

    /// Validate the configuration and build the enumerator
    pub fn build(self) -> Result<Enumerator, EnumeratorError> {
        let data = DataSet::new(self.data)?;
        let distinct = data.distinct_values();

        if distinct.len() > self.max_distinct {
            return Err(EnumeratorError::TooManyDistinctValues {
                count: distinct.len(),
                max: self.max_distinct,
            });
        }

        let model = self.model.build()?;

        Ok(Enumerator {
            data,
            distinct,
            model,
        })
    }
}

impl Default for EnumeratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Enumerator {
    /// Enumerator over `data` with the empirical model and default limits
    pub fn new(data: impl Into<Vec<f64>>) -> Result<Self, EnumeratorError> {
        EnumeratorBuilder::new().data(data).build()
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }

    /// Distinct values, ascending, with multiplicities
    pub fn distinct(&self) -> &[DistinctValue] {
        &self.distinct
    }

    /// Name of the probability model in use
    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// Largest cluster count, i.e. the number of distinct values
    pub fn max_clusters(&self) -> usize {
        self.distinct.len()
    }

    /// All surjective codes onto `k` clusters
    pub fn codes(&self, k: usize) -> Vec<Code> {
        surjective_codes(self.distinct.len(), k)
    }

    /// Number of codes `enumerate` scores, over every `k` in `1..=D`
    pub fn code_count(&self) -> usize {
        (1..=self.max_clusters())
            .map(|k| surjection_count(self.distinct.len(), k))
            .fold(0, usize::saturating_add)
    }

    /// Build and score the partition a code describes
    pub fn score(&self, code: &[usize]) -> ScoredPartition {
        score_code(code, &self.distinct, self.model.as_ref())
    }

    /// Distinct scored partitions with exactly `k` clusters, in [`rank`] order
    pub fn partitions_for(&self, k: usize) -> Vec<ScoredPartition> {
        let unique: HashSet<ScoredPartition> =
            self.codes(k).iter().map(|code| self.score(code)).collect();
        rank(unique)
    }

    /// Every distinct partition for `k` in `1..=D`, in [`rank`] order
    pub fn enumerate(&self) -> Vec<ScoredPartition> {
        let mut unique = HashSet::new();

        for k in 1..=self.max_clusters() {
            unique.extend(self.codes(k).iter().map(|code| self.score(code)));
        }

        rank(unique)
    }
}

/// Sort by `(entropy, -dispersion)`, descending
///
/// Highest entropy comes first; among equal entropies the narrowest
/// dispersion does. Reverse the result for lowest entropy first.
pub fn rank(partitions: impl IntoIterator<Item = ScoredPartition>) -> Vec<ScoredPartition> {
    let mut ranked: Vec<ScoredPartition> = partitions.into_iter().collect();
    ranked.sort_by(|a, b| b.rank_cmp(a));
    ranked
}
