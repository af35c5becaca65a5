use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dataset::DatasetKind;
use crate::error::BenchError;
use crate::primitives::DEFAULT_RECURSION_LIMIT;

/// Deepest recursion limit accepted.
///
/// Selection and insertion sort recurse once per element, so this many
/// frames must fit the 8 MiB main-thread stack of a debug build.
pub const MAX_RECURSION_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

/// Benchmark run parameters.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Input lengths, one table row each per dataset kind
    pub sizes: Vec<usize>,
    pub kinds: Vec<DatasetKind>,
    /// Timed repetitions averaged per cell
    pub runs: u32,
    pub seed: u64,
    pub recursion_limit: usize,
    pub format: OutputFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![0, 1, 2, 10, 100],
            kinds: DatasetKind::ALL.to_vec(),
            runs: 10,
            seed: 12345,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            format: OutputFormat::Table,
        }
    }
}

impl BenchConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BenchError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.runs == 0 {
            return Err(BenchError::InvalidConfig(
                "runs must be greater than 0".to_string(),
            ));
        }
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one input size is required".to_string(),
            ));
        }
        if self.kinds.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one dataset kind is required".to_string(),
            ));
        }
        if self.recursion_limit == 0 || self.recursion_limit > MAX_RECURSION_LIMIT {
            return Err(BenchError::InvalidConfig(format!(
                "recursion_limit must be in 1..={}, got {}",
                MAX_RECURSION_LIMIT, self.recursion_limit
            )));
        }
        Ok(())
    }
}
