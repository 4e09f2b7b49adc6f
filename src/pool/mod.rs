//! Parallel batch runs over many independent datasets.
//!
//! Each dataset is handed to one worker of a dedicated rayon pool, which
//! calls the aggregator once and keeps the private result. Workers share
//! nothing but the (copyable) aggregator configuration.
//!
//! A failing dataset fails the whole batch and the error names it.

use crate::aggregator::{Aggregator, BurndownConfig, BurndownSeries, ResolutionSpec};
use crate::schema::IntervalSet;
use crate::utils::config::DEFAULT_MAX_WORKERS;
use crate::utils::error::PoolError;
use log::{debug, info};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Batch configuration
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Resolution applied to every dataset
    pub resolution: ResolutionSpec,

    /// Worker threads (0 lets rayon pick)
    pub max_workers: usize,

    /// Aggregator configuration shared by all workers
    pub aggregator: BurndownConfig,
}

impl BatchConfig {
    pub fn new(resolution: ResolutionSpec) -> Self {
        Self {
            resolution,
            max_workers: DEFAULT_MAX_WORKERS,
            aggregator: BurndownConfig::default(),
        }
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_aggregator(mut self, aggregator: BurndownConfig) -> Self {
        self.aggregator = aggregator;
        self
    }
}

/// Result of one dataset
#[derive(Debug, Clone)]
pub struct DatasetResult {
    /// Position of the dataset in the submitted batch
    pub dataset: usize,

    /// Number of input intervals
    pub interval_count: usize,

    pub series: BurndownSeries,

    /// Wall time spent aggregating this dataset
    pub elapsed: Duration,
}

/// Result of a whole batch, ordered by dataset
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub results: Vec<DatasetResult>,

    /// Worker threads actually used
    pub workers: usize,

    pub elapsed: Duration,
}

impl BatchReport {
    pub fn total_intervals(&self) -> usize {
        self.results.iter().map(|r| r.interval_count).sum()
    }

    pub fn total_buckets(&self) -> usize {
        self.results.iter().map(|r| r.series.len()).sum()
    }
}

/// Aggregate every dataset on a worker pool
///
/// **Public** - main entry point for batch orchestration
///
/// # Arguments
/// * `config` - Resolution, worker count and aggregator configuration
/// * `datasets` - Independent datasets; the index is the dataset id
///
/// # Returns
/// One result per dataset, in submission order
///
/// # Errors
/// * `PoolError::ThreadPool` - the worker pool could not be created
/// * `PoolError::DatasetFailed` - a dataset failed to aggregate
pub fn run_batch(config: &BatchConfig, datasets: &[IntervalSet]) -> Result<BatchReport, PoolError> {
    let start_time = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_workers)
        .thread_name(|index| format!("burndown-worker-{}", index))
        .build()
        .map_err(|e| PoolError::ThreadPool(e.to_string()))?;

    let workers = pool.current_num_threads();
    info!(
        "Dispatching {} datasets to {} workers at resolution {}",
        datasets.len(),
        workers,
        config.resolution
    );

    let aggregator = Aggregator::new(config.aggregator);
    let resolution = config.resolution;

    let results = pool.install(|| {
        datasets
            .par_iter()
            .enumerate()
            .map(|(dataset, set)| run_one(&aggregator, &resolution, dataset, set))
            .collect::<Result<Vec<_>, _>>()
    })?;

    let elapsed = start_time.elapsed();
    info!(
        "Batch of {} datasets completed in {:.2}s",
        results.len(),
        elapsed.as_secs_f64()
    );

    Ok(BatchReport {
        results,
        workers,
        elapsed,
    })
}

/// Aggregate a single dataset
///
/// **Private** - runs on a worker thread
fn run_one(
    aggregator: &Aggregator,
    resolution: &ResolutionSpec,
    dataset: usize,
    set: &IntervalSet,
) -> Result<DatasetResult, PoolError> {
    let start_time = Instant::now();

    let series = aggregator
        .aggregate(resolution, &set.start_timestamps, &set.end_timestamps)
        .map_err(|source| PoolError::DatasetFailed { dataset, source })?;

    let elapsed = start_time.elapsed();
    debug!(
        "Dataset {} has completed its task: {} intervals, {} buckets in {:.3}s",
        dataset,
        set.len(),
        series.len(),
        elapsed.as_secs_f64()
    );

    Ok(DatasetResult {
        dataset,
        interval_count: set.len(),
        series,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BurndownError;

    #[test]
    fn test_results_keep_dataset_order() {
        let datasets: Vec<IntervalSet> = (0..8)
            .map(|i| IntervalSet::new(vec![0; i + 1], vec![10; i + 1]))
            .collect();
        let config = BatchConfig::new(ResolutionSpec::legacy(5)).with_max_workers(3);

        let report = run_batch(&config, &datasets).unwrap();

        assert_eq!(report.workers, 3);
        assert_eq!(report.results.len(), 8);
        for (i, result) in report.results.iter().enumerate() {
            assert_eq!(result.dataset, i);
            assert_eq!(result.series.active_counts[0], i as i64 + 1);
        }
        assert_eq!(report.total_intervals(), 36);
    }

    #[test]
    fn test_failure_names_dataset() {
        let datasets = vec![
            IntervalSet::new(vec![0], vec![5]),
            IntervalSet::new(vec![0, 1], vec![5]),
        ];
        let config = BatchConfig::new(ResolutionSpec::legacy(1)).with_max_workers(2);

        let err = run_batch(&config, &datasets).unwrap_err();
        match err {
            PoolError::DatasetFailed { dataset, source } => {
                assert_eq!(dataset, 1);
                assert_eq!(source, BurndownError::InputLengthMismatch { starts: 2, ends: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_batch() {
        let config = BatchConfig::new(ResolutionSpec::legacy(1)).with_max_workers(1);
        let report = run_batch(&config, &[]).unwrap();
        assert!(report.results.is_empty());
    }
}
