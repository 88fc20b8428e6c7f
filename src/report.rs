use crate::partition::{Partition, ScoredPartition};
use serde::Serialize;
use std::fmt;

/// Machine-readable view of one ranked partition
#[derive(Debug, Clone, Serialize)]
pub struct PartitionRecord {
    pub clusters: Vec<Vec<f64>>,
    pub cluster_count: usize,
    pub entropy: f64,
    pub std: f64,
}

impl From<&ScoredPartition> for PartitionRecord {
    fn from(scored: &ScoredPartition) -> Self {
        Self {
            clusters: scored.partition.clusters().to_vec(),
            cluster_count: scored.cluster_count(),
            entropy: scored.entropy,
            std: scored.dispersion,
        }
    }
}

/// Plain notation for everyday magnitudes, exponent notation at the extremes
fn write_value(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-5) {
        write!(f, "{:e}", value)
    } else {
        write!(f, "{}", value)
    }
}

/// Score with three decimals, in exponent form once it reaches 1e16
struct Score(f64);

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.abs() >= 1e16 {
            write!(f, "{:.3e}", self.0)
        } else {
            write!(f, "{:.3}", self.0)
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cluster) in self.clusters().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in cluster.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write_value(f, *value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for ScoredPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  #clusters={}  entropy={}  std={}",
            self.partition,
            self.cluster_count(),
            Score(self.entropy),
            Score(self.dispersion)
        )
    }
}

/// One line per partition, in the order given
pub fn render_text(ranked: &[ScoredPartition]) -> String {
    ranked.iter().map(|p| format!("{}\n", p)).collect()
}

/// Pretty-printed JSON array of [`PartitionRecord`]s
pub fn render_json(ranked: &[ScoredPartition]) -> serde_json::Result<String> {
    let records: Vec<PartitionRecord> = ranked.iter().map(PartitionRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
