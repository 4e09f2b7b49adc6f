//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while computing a burndown series
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BurndownError {
    #[error("Invalid resolution unit: {0}")]
    InvalidResolutionUnit(String),

    #[error("Invalid resolution value: {0} (must be a positive integer)")]
    InvalidResolutionValue(i64),

    #[error("Input length mismatch: {starts} start timestamps, {ends} end timestamps")]
    InputLengthMismatch { starts: usize, ends: usize },

    #[error("Time axis too large: {buckets} buckets exceeds the limit of {max}")]
    AxisTooLarge { buckets: u128, max: usize },
}

/// Errors that can occur while running a batch of datasets
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Dataset {dataset} failed: {source}")]
    DatasetFailed {
        dataset: usize,
        #[source]
        source: BurndownError,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Errors that can occur during file input and output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
