use crate::utils::config::{DEFAULT_ISSUES_PER_JOB, DEFAULT_JOBS, DEFAULT_MAX_WORKERS};
use std::path::PathBuf;

/// Arguments for the compute command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ComputeArgs {
    /// Input JSON interval set
    pub input: PathBuf,

    /// Resolution unit tag (ignored in legacy mode)
    pub unit: String,

    /// Resolution multiplier, or raw duration in legacy mode
    pub value: i64,

    /// Treat `value` as a raw duration in base units
    pub legacy: bool,

    /// Output path for the JSON series (optional)
    pub output: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Maximum summary rows
    pub summary_lines: usize,

    /// Ceiling on the bucket count
    pub max_buckets: usize,
}

impl Default for ComputeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("intervals.json"),
            unit: "days".to_string(),
            value: 1,
            legacy: false,
            output: Some(PathBuf::from("burndown.json")),
            print_summary: false,
            summary_lines: 20,
            max_buckets: crate::utils::config::DEFAULT_MAX_BUCKETS,
        }
    }
}

/// Arguments for the bench command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BenchArgs {
    /// Number of independent datasets
    pub jobs: usize,

    /// Intervals per dataset
    pub issues: usize,

    /// Resolution unit tag (ignored in legacy mode)
    pub unit: String,

    /// Resolution multiplier, or raw duration in legacy mode
    pub value: i64,

    /// Treat `value` as a raw duration in base units
    pub legacy: bool,

    /// Worker threads
    pub max_workers: usize,

    /// Seed for reproducible datasets
    pub seed: Option<u64>,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            jobs: DEFAULT_JOBS,
            issues: DEFAULT_ISSUES_PER_JOB,
            unit: "days".to_string(),
            value: 1,
            legacy: false,
            max_workers: DEFAULT_MAX_WORKERS,
            seed: None,
        }
    }
}
