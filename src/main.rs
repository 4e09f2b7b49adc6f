//! Burndown CLI
//!
//! Computes active-interval time series from JSON interval sets and
//! benchmarks the engine over many synthetic datasets in parallel.

use anyhow::Result;
use burndown::commands::{
    bench, display_version, execute_bench, execute_compute, validate_args, validate_series_file,
    BenchArgs, ComputeArgs,
};
use burndown::utils::config::{
    DEFAULT_ISSUES_PER_JOB, DEFAULT_JOBS, DEFAULT_MAX_BUCKETS, DEFAULT_MAX_WORKERS,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Burndown - active interval counts over time
#[derive(Parser, Debug)]
#[command(name = "burndown")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a burndown series from a JSON interval set
    Compute {
        /// Input JSON with start_timestamps and end_timestamps
        #[arg(short, long)]
        input: PathBuf,

        /// Resolution unit (seconds, minutes, hours, days, weeks, months, years)
        #[arg(short, long, default_value = "days", env = "BURNDOWN_UNIT")]
        unit: String,

        /// Resolution multiplier (raw duration with --legacy)
        #[arg(short = 'n', long, default_value = "1", env = "BURNDOWN_VALUE")]
        value: i64,

        /// Treat --value as a raw duration in base units
        #[arg(long)]
        legacy: bool,

        /// Output path for the JSON series
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Maximum rows in the text summary
        #[arg(long, default_value = "20")]
        summary_lines: usize,

        /// Maximum number of buckets per series
        #[arg(long, default_value_t = DEFAULT_MAX_BUCKETS, env = "BURNDOWN_MAX_BUCKETS")]
        max_buckets: usize,
    },

    /// Generate synthetic datasets and aggregate them in parallel
    Bench {
        /// Number of datasets
        #[arg(short, long, default_value_t = DEFAULT_JOBS)]
        jobs: usize,

        /// Intervals per dataset
        #[arg(long, default_value_t = DEFAULT_ISSUES_PER_JOB)]
        issues: usize,

        /// Resolution unit
        #[arg(short, long, default_value = "days", env = "BURNDOWN_UNIT")]
        unit: String,

        /// Resolution multiplier (raw duration with --legacy)
        #[arg(short = 'n', long, default_value = "1", env = "BURNDOWN_VALUE")]
        value: i64,

        /// Treat --value as a raw duration in base units
        #[arg(long)]
        legacy: bool,

        /// Worker threads
        #[arg(short, long, default_value_t = DEFAULT_MAX_WORKERS, env = "BURNDOWN_WORKERS")]
        workers: usize,

        /// Seed for reproducible datasets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate a series JSON file
    Validate {
        /// Path to series JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compute {
            input,
            unit,
            value,
            legacy,
            output,
            summary,
            summary_lines,
            max_buckets,
        } => {
            let args = ComputeArgs {
                input,
                unit,
                value,
                legacy,
                output,
                print_summary: summary,
                summary_lines,
                max_buckets,
            };

            validate_args(&args)?;
            execute_compute(args)?;
        }

        Commands::Bench {
            jobs,
            issues,
            unit,
            value,
            legacy,
            workers,
            seed,
        } => {
            let args = BenchArgs {
                jobs,
                issues,
                unit,
                value,
                legacy,
                max_workers: workers,
                seed,
            };

            bench::validate_args(&args)?;
            execute_bench(args)?;
        }

        Commands::Validate { file } => {
            validate_series_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
