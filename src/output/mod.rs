//! Readers and writers for interval sets and burndown series.
//!
//! This module handles data on disk and on the terminal:
//! - JSON interval sets (input)
//! - JSON series documents (output)
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{
    build_document, bucket_dates, read_intervals, read_series, write_intervals, write_series,
};
pub use summary::generate_text_summary;

use crate::utils::error::OutputError;
use std::path::Path;

/// Reject output targets that can never hold a JSON document
///
/// An empty path or an existing directory fails with `InvalidPath`.
/// A missing parent is accepted; writers create it.
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("empty output path".to_string()));
    }

    match path.metadata() {
        Ok(meta) if meta.is_dir() => Err(OutputError::InvalidPath(format!(
            "{} is a directory, expected a file",
            path.display()
        ))),
        _ => Ok(()),
    }
}
