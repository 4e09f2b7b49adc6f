//! Bench command implementation.
//!
//! Generates many synthetic datasets and aggregates them in parallel,
//! reporting each completion and the total throughput.

use super::models::BenchArgs;
use super::utils::resolution_from_args;
use crate::generator::{generate_pool, GeneratorConfig};
use crate::pool::{run_batch, BatchConfig, BatchReport};
use crate::utils::config::MAX_JOBS;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the bench command
///
/// **Public** - main entry point called from main.rs
pub fn execute_bench(args: BenchArgs) -> Result<BatchReport> {
    let resolution = resolution_from_args(&args.unit, args.value, args.legacy)?;

    let start_time = Instant::now();
    let datasets = generate_pool(args.jobs, args.issues, &GeneratorConfig::new(), args.seed);
    info!(
        "Pool generated: {} datasets in {:.2}s",
        datasets.len(),
        start_time.elapsed().as_secs_f64()
    );

    let config = BatchConfig::new(resolution).with_max_workers(args.max_workers);
    let report = run_batch(&config, &datasets).context("Batch failed")?;

    for result in &report.results {
        info!("Dataset {} has completed its task", result.dataset);
    }

    let secs = report.elapsed.as_secs_f64();
    println!(
        "Aggregated {} intervals across {} datasets on {} workers in {:.3}s ({:.0} intervals/s)",
        report.total_intervals(),
        report.results.len(),
        report.workers,
        secs,
        report.total_intervals() as f64 / secs.max(f64::EPSILON)
    );

    Ok(report)
}

/// Validate bench arguments
///
/// **Public** - can be called before execute_bench for early validation
pub fn validate_args(args: &BenchArgs) -> Result<()> {
    if args.jobs == 0 {
        anyhow::bail!("jobs must be greater than 0");
    }

    if args.jobs > MAX_JOBS {
        anyhow::bail!("jobs is too large (max {})", MAX_JOBS);
    }

    if args.value <= 0 {
        anyhow::bail!("Resolution value must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&BenchArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_zero_jobs() {
        let args = BenchArgs {
            jobs: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_too_many_jobs() {
        let args = BenchArgs {
            jobs: MAX_JOBS + 1,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_small_bench() {
        let args = BenchArgs {
            jobs: 4,
            issues: 100,
            unit: "hours".to_string(),
            max_workers: 2,
            seed: Some(9),
            ..Default::default()
        };

        let report = execute_bench(args).unwrap();
        assert_eq!(report.results.len(), 4);
        assert_eq!(report.total_intervals(), 400);
    }
}
