use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnumeratorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid probability model: {0}")]
    InvalidModel(String),

    #[error("Too many distinct values: {count} (max: {max})")]
    TooManyDistinctValues { count: usize, max: usize },
}
