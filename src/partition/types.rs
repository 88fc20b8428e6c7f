use crate::dataset::DistinctValue;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Grouping of raw values into clusters, held in canonical form
///
/// Each cluster is sorted ascending and the clusters are sorted
/// lexicographically, so two partitions that differ only in how their
/// clusters were labelled are equal and hash alike.
#[derive(Debug, Clone)]
pub struct Partition {
    clusters: Vec<Vec<f64>>,
}

impl Partition {
    /// Canonicalise arbitrary clusters; empty clusters are dropped
    pub fn from_clusters(clusters: impl IntoIterator<Item = Vec<f64>>) -> Self {
        let mut clusters: Vec<Vec<f64>> = clusters
            .into_iter()
            .filter(|cluster| !cluster.is_empty())
            .map(|mut cluster| {
                cluster.sort_by(f64::total_cmp);
                cluster
            })
            .collect();
        clusters.sort_by(|a, b| cmp_values(a, b));

        Self { clusters }
    }

    /// Expand each distinct value `count` times into the cluster its code names
    ///
    /// `code[i]` is the cluster id of `distinct[i]`; extra positions on
    /// either side are ignored.
    pub fn from_code(code: &[usize], distinct: &[DistinctValue]) -> Self {
        let mut grouped: BTreeMap<usize, Vec<f64>> = BTreeMap::new();

        for (&cluster_id, entry) in code.iter().zip(distinct) {
            grouped
                .entry(cluster_id)
                .or_default()
                .extend(std::iter::repeat(entry.value).take(entry.count));
        }

        Self::from_clusters(grouped.into_values())
    }

    pub fn clusters(&self) -> &[Vec<f64>] {
        &self.clusters
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }
}

fn cmp_values(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.total_cmp(y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

impl Ord for Partition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.clusters
            .iter()
            .zip(&other.clusters)
            .map(|(a, b)| cmp_values(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| self.clusters.len().cmp(&other.clusters.len()))
    }
}

impl PartialOrd for Partition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Partition {}

impl Hash for Partition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.clusters.len().hash(state);
        for cluster in &self.clusters {
            cluster.len().hash(state);
            for value in cluster {
                value.to_bits().hash(state);
            }
        }
    }
}

/// A partition with its entropy and dispersion scores
///
/// Equality and hashing only look at the partition; the scores are a
/// deterministic function of it.
#[derive(Debug, Clone)]
pub struct ScoredPartition {
    pub partition: Partition,
    /// Summed per-cluster Shannon entropy, in bits
    pub entropy: f64,
    /// Summed per-cluster population standard deviation
    pub dispersion: f64,
}

impl ScoredPartition {
    pub fn cluster_count(&self) -> usize {
        self.partition.cluster_count()
    }

    /// Compare by `(entropy, -dispersion)`
    ///
    /// `Less` means better: lower entropy, or equal entropy and wider spread.
    pub fn quality_cmp(&self, other: &Self) -> Ordering {
        self.entropy
            .total_cmp(&other.entropy)
            .then_with(|| other.dispersion.total_cmp(&self.dispersion))
    }

    /// Quality order with exact ties settled by the canonical partition
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.quality_cmp(other)
            .then_with(|| self.partition.cmp(&other.partition))
    }
}

impl PartialEq for ScoredPartition {
    fn eq(&self, other: &Self) -> bool {
        self.partition == other.partition
    }
}

impl Eq for ScoredPartition {}

impl Hash for ScoredPartition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.partition.hash(state);
    }
}
