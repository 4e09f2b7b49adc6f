use crate::aggregator::ResolutionSpec;
use crate::output::read_series;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Build the resolution from CLI parts
///
/// Legacy mode ignores the unit and uses `value` as a raw duration.
pub fn resolution_from_args(unit: &str, value: i64, legacy: bool) -> Result<ResolutionSpec> {
    if legacy {
        return Ok(ResolutionSpec::legacy(value));
    }

    ResolutionSpec::named(unit, value).context("Failed to parse resolution unit")
}

/// Validate a series JSON file
pub fn validate_series_file(file_path: PathBuf) -> Result<()> {
    println!("Validating series: {}", file_path.display());

    let document = read_series(&file_path)?;
    let series = &document.series;

    if series.bucket_timestamps.len() != series.active_counts.len() {
        anyhow::bail!(
            "Misaligned series: {} bucket timestamps, {} counts",
            series.bucket_timestamps.len(),
            series.active_counts.len()
        );
    }

    if series
        .bucket_timestamps
        .windows(2)
        .any(|w| w[1].checked_sub(w[0]) != Some(series.bucket_duration))
    {
        anyhow::bail!("Bucket timestamps are not evenly spaced");
    }

    if series.active_counts.iter().any(|&c| c < 0) {
        anyhow::bail!("Series contains negative active counts");
    }

    println!("✓ Valid series JSON");
    println!("  Version: {}", document.version);
    println!("  Resolution: {}", document.resolution);
    println!("  Intervals: {}", document.interval_count);
    println!("  Buckets: {}", series.len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Burndown v{}", env!("CARGO_PKG_VERSION"));
    println!("Series Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Sweep-line burndown aggregation of interval data.");
}
