mod score;
mod stats;
mod types;

#[cfg(test)]
mod tests;

pub use score::{cluster_dispersion, cluster_entropy, score_code};
pub use stats::{mean, population_std_dev, shannon_entropy_bits, Moments};
pub use types::{Partition, ScoredPartition};
