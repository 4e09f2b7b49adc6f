//! Compute command implementation.
//!
//! The compute command:
//! 1. Reads the interval set
//! 2. Resolves the resolution
//! 3. Aggregates the burndown series
//! 4. Writes the series document and optional summary

use super::models::ComputeArgs;
use super::utils::resolution_from_args;
use crate::aggregator::{Aggregator, BurndownConfig, BurndownSeries};
use crate::output::{build_document, generate_text_summary, read_intervals, write_series};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the compute command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read or parse failures
/// * Any aggregation error (invalid resolution, length mismatch, axis too large)
/// * File write errors
pub fn execute_compute(args: ComputeArgs) -> Result<BurndownSeries> {
    let start_time = Instant::now();

    info!("Step 1/4: Reading intervals from {}...", args.input.display());
    let intervals = read_intervals(&args.input)
        .with_context(|| format!("Failed to read intervals from {}", args.input.display()))?;

    info!("Step 2/4: Resolving resolution...");
    let resolution = resolution_from_args(&args.unit, args.value, args.legacy)?;
    let config = BurndownConfig::new().with_max_buckets(args.max_buckets);
    let aggregator = Aggregator::new(config);

    info!(
        "Step 3/4: Aggregating {} intervals at {}...",
        intervals.start_timestamps.len(),
        resolution
    );
    let series = aggregator
        .aggregate(
            &resolution,
            &intervals.start_timestamps,
            &intervals.end_timestamps,
        )
        .context("Failed to compute burndown")?;

    debug!("Series has {} buckets", series.len());

    info!("Step 4/4: Writing output...");
    let document = build_document(series, resolution, intervals.len(), config.time_base);

    if let Some(output) = &args.output {
        write_series(&document, output).context("Failed to write series JSON")?;
        info!("✓ Series written to: {}", output.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("BURNDOWN SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Intervals:  {}", document.interval_count);
        println!("Resolution: {}", document.resolution);
        println!(
            "\n{}",
            generate_text_summary(
                &document.series,
                document.bucket_dates.as_deref(),
                args.summary_lines
            )
        );
        println!("{}", "=".repeat(60));
    }

    info!(
        "Compute completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(document.series)
}

/// Validate compute arguments
///
/// **Public** - can be called before execute_compute for early validation
pub fn validate_args(args: &ComputeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.legacy && args.unit.trim().is_empty() {
        anyhow::bail!("Resolution unit cannot be empty");
    }

    if args.value <= 0 {
        anyhow::bail!("Resolution value must be greater than 0");
    }

    if args.max_buckets == 0 {
        anyhow::bail!("max_buckets must be greater than 0");
    }

    if args.print_summary && args.summary_lines == 0 {
        anyhow::bail!("summary_lines must be greater than 0");
    }

    Ok(())
}
