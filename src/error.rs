//! Error types for the sort core and the benchmark driver.

use thiserror::Error;

/// Failures reported by the min-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("cannot extract from an empty heap")]
    Empty,
}

/// Failures a [`Sorter`](crate::Sorter) can report.
///
/// Iterative sorts never fail; recursive variants fail once their call depth
/// exceeds the configured limit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("maximum recursion depth of {limit} exceeded")]
    RecursionLimit { limit: usize },

    #[error(transparent)]
    Heap(#[from] HeapError),
}

/// Failures of a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("{algorithm} produced unsorted output for {kind} input of length {len}")]
    Incorrect {
        algorithm: &'static str,
        kind: String,
        len: usize,
    },

    #[error("{algorithm} failed: {source}")]
    Sort {
        algorithm: &'static str,
        #[source]
        source: SortError,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
