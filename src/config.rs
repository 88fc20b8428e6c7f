use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dataset::DEFAULT_DATA;
use crate::enumerator::{Enumerator, EnumeratorBuilder, EnumeratorError};
use crate::model::ModelConfig;

/// Settings for one enumeration run, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// The multiset to cluster
    pub data: Vec<f64>,
    pub model: ModelConfig,
    pub max_distinct: usize,
    /// Print lowest entropy first instead of highest
    pub ascending: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA.to_vec(),
            model: ModelConfig::default(),
            max_distinct: EnumeratorBuilder::DEFAULT_MAX_DISTINCT,
            ascending: false,
        }
    }
}

impl RunConfig {
    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Invalid config JSON")
    }

    /// Build the enumerator this config describes
    pub fn enumerator(&self) -> Result<Enumerator, EnumeratorError> {
        EnumeratorBuilder::new()
            .data(self.data.clone())
            .model(self.model)
            .max_distinct(self.max_distinct)
            .build()
    }
}
