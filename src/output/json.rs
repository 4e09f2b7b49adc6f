//! JSON reader and writer for interval sets and series documents.

use crate::aggregator::{BurndownSeries, ResolutionSpec, TimeBase};
use crate::schema::{IntervalSet, SeriesDocument};
use crate::utils::config::{NANOS_PER_SECOND, SCHEMA_VERSION};
use crate::utils::error::OutputError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Wrap a series in a versioned document
///
/// **Public** - adds RFC 3339 bucket dates and a generation timestamp
///
/// # Arguments
/// * `series` - Computed series
/// * `resolution` - Resolution it was computed at
/// * `interval_count` - Number of input intervals
/// * `time_base` - Unit of the bucket instants
pub fn build_document(
    series: BurndownSeries,
    resolution: ResolutionSpec,
    interval_count: usize,
    time_base: TimeBase,
) -> SeriesDocument {
    let dates = bucket_dates(&series.bucket_timestamps, time_base);
    if dates.is_none() {
        debug!("Bucket instants outside the calendar range, omitting dates");
    }

    SeriesDocument {
        version: SCHEMA_VERSION.to_string(),
        resolution,
        interval_count,
        series,
        bucket_dates: dates,
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Render bucket instants as RFC 3339 strings
///
/// **Public** - returns `None` if any instant is outside chrono's range
pub fn bucket_dates(instants: &[i64], time_base: TimeBase) -> Option<Vec<String>> {
    let per_second = time_base.units_per_second();
    let nanos_per_unit = NANOS_PER_SECOND / per_second;

    instants
        .iter()
        .map(|&instant| {
            let secs = instant.div_euclid(per_second);
            let nanos = (instant.rem_euclid(per_second) * nanos_per_unit) as u32;
            DateTime::<Utc>::from_timestamp(secs, nanos).map(|dt| dt.to_rfc3339())
        })
        .collect()
}

/// Write a series document to a JSON file
///
/// **Public** - main entry point for series output
///
/// # Errors
/// * `OutputError::Io` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_series(
    document: &SeriesDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing series to: {}", output_path.display());
    write_json(document, output_path)?;

    info!(
        "Series written successfully ({} buckets, {} bytes)",
        document.series.len(),
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Write an interval set to a JSON file
///
/// **Public** - used to persist generated datasets
pub fn write_intervals(
    intervals: &IntervalSet,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    debug!(
        "Writing {} intervals to: {}",
        intervals.len(),
        output_path.display()
    );
    write_json(intervals, output_path)
}

/// Read a series document from a JSON file
///
/// # Errors
/// * `OutputError::Io` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_series(input_path: impl AsRef<Path>) -> Result<SeriesDocument, OutputError> {
    let document: SeriesDocument = read_json(input_path.as_ref())?;

    debug!(
        "Series loaded: version {}, {} buckets",
        document.version,
        document.series.len()
    );

    Ok(document)
}

/// Read an interval set from a JSON file
///
/// **Public** - input side of the compute command
///
/// Expected shape: `{"start_timestamps": [..], "end_timestamps": [..]}`
pub fn read_intervals(input_path: impl AsRef<Path>) -> Result<IntervalSet, OutputError> {
    let intervals: IntervalSet = read_json(input_path.as_ref())?;

    debug!("Loaded {} intervals", intervals.len());

    Ok(intervals)
}

/// Serialize `value` as pretty JSON, creating parent directories
///
/// **Private** - shared by the writers
fn write_json<T: Serialize>(value: &T, output_path: &Path) -> Result<(), OutputError> {
    super::validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value)?;

    Ok(())
}

/// **Private** - shared by the readers
fn read_json<T: DeserializeOwned>(input_path: &Path) -> Result<T, OutputError> {
    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;

    Ok(value)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bucket_dates_nanoseconds() {
        let dates = bucket_dates(&[0, 86_400 * NANOS_PER_SECOND], TimeBase::Nanoseconds).unwrap();
        assert_eq!(dates, vec!["1970-01-01T00:00:00+00:00", "1970-01-02T00:00:00+00:00"]);
    }

    #[test]
    fn test_bucket_dates_negative_seconds() {
        let dates = bucket_dates(&[-1], TimeBase::Seconds).unwrap();
        assert_eq!(dates, vec!["1969-12-31T23:59:59+00:00"]);
    }

    #[test]
    fn test_bucket_dates_out_of_range() {
        assert!(bucket_dates(&[i64::MAX], TimeBase::Seconds).is_none());
    }

    #[test]
    fn test_interval_round_trip() {
        let set = IntervalSet::new(vec![1, 2, 3], vec![4, 5, 6]);
        let temp_file = NamedTempFile::new().unwrap();

        write_intervals(&set, temp_file.path()).unwrap();
        let loaded = read_intervals(temp_file.path()).unwrap();

        assert_eq!(loaded, set);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = read_intervals(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(OutputError::Io(_))));
    }
}
