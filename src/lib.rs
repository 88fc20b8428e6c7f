// Public API exports
pub mod codes;
pub mod config;
pub mod dataset;
pub mod enumerator;
pub mod model;
pub mod partition;
pub mod report;

// Re-export main types for convenience
pub use codes::{is_surjective, surjection_count, surjective_codes, Code};
pub use config::RunConfig;
pub use dataset::{distinct_values, DataSet, DistinctValue, DEFAULT_DATA};
pub use enumerator::{rank, Enumerator, EnumeratorBuilder, EnumeratorError};

pub use model::{ClusterProbabilityModel, EmpiricalFrequencyModel, GaussianKernelModel, ModelConfig};
pub use partition::{Partition, ScoredPartition};
pub use report::{render_json, render_text, PartitionRecord};
