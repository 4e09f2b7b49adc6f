//! Burndown aggregation of interval data.
//!
//! This module turns two aligned sequences of start/end instants into a
//! fixed-resolution time series of active counts:
//! - Resolve the resolution into a bucket duration
//! - Build the covering time axis
//! - Sweep +1/-1 deltas with a prefix sum
//! - Assemble the aligned output series
//!
//! Every call is a pure function of its inputs and holds no shared state,
//! so one `Aggregator` can be used from many threads at once.

pub mod axis;
pub mod resolution;
pub mod series;
pub mod sweep;

// Re-export main types and functions
pub use axis::{build_axis, TimeAxis};
pub use resolution::{ResolutionSpec, ResolutionUnit, TimeBase};
pub use series::{assemble, BurndownSeries};
pub use sweep::{accumulate_deltas, prefix_sum, sweep};

use crate::utils::config::DEFAULT_MAX_BUCKETS;
use crate::utils::error::BurndownError;
use log::debug;

/// Aggregator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurndownConfig {
    /// Unit of the input instants
    pub time_base: TimeBase,

    /// Ceiling on the number of buckets per call
    pub max_buckets: usize,
}

impl Default for BurndownConfig {
    fn default() -> Self {
        Self {
            time_base: TimeBase::Nanoseconds,
            max_buckets: DEFAULT_MAX_BUCKETS,
        }
    }
}

impl BurndownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_base(mut self, time_base: TimeBase) -> Self {
        self.time_base = time_base;
        self
    }

    pub fn with_max_buckets(mut self, max_buckets: usize) -> Self {
        self.max_buckets = max_buckets;
        self
    }
}

/// Stateless burndown engine
///
/// **Public** - holds configuration only; cheap to copy
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    config: BurndownConfig,
}

impl Aggregator {
    pub fn new(config: BurndownConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BurndownConfig {
        &self.config
    }

    /// Compute the burndown series for one dataset
    ///
    /// **Public** - main entry point for aggregation
    ///
    /// # Arguments
    /// * `resolution` - Bucket granularity
    /// * `starts` - Start instants
    /// * `ends` - End instants, aligned with `starts`
    ///
    /// # Returns
    /// The full series; empty when there are no intervals
    ///
    /// # Errors
    /// * `InvalidResolutionValue` - resolution does not resolve to a positive duration
    /// * `InputLengthMismatch` - `starts` and `ends` differ in length
    /// * `AxisTooLarge` - bucket count exceeds `max_buckets`
    pub fn aggregate(
        &self,
        resolution: &ResolutionSpec,
        starts: &[i64],
        ends: &[i64],
    ) -> Result<BurndownSeries, BurndownError> {
        let bucket_duration = resolution.bucket_duration(self.config.time_base)?;

        if starts.len() != ends.len() {
            return Err(BurndownError::InputLengthMismatch {
                starts: starts.len(),
                ends: ends.len(),
            });
        }

        debug!(
            "Aggregating {} intervals at resolution {} ({} base units)",
            starts.len(),
            resolution,
            bucket_duration
        );

        let Some(axis) = build_axis(starts, ends, bucket_duration, self.config.max_buckets)? else {
            return Ok(BurndownSeries::empty(bucket_duration));
        };

        let counts = sweep(&axis, starts, ends);

        Ok(assemble(&axis, counts))
    }

    /// Named-unit form: `("days", 7)` means 7-day buckets
    ///
    /// # Errors
    /// * `InvalidResolutionUnit` - unit tag not recognized
    /// * Any error from [`Aggregator::aggregate`]
    pub fn compute_burndown(
        &self,
        resolution_unit: &str,
        resolution_value: i64,
        starts: &[i64],
        ends: &[i64],
    ) -> Result<BurndownSeries, BurndownError> {
        let spec = ResolutionSpec::named(resolution_unit, resolution_value)?;
        self.aggregate(&spec, starts, ends)
    }

    /// Legacy form: `resolution_value` is a raw duration in base units
    pub fn process_timestamps(
        &self,
        resolution_value: i64,
        starts: &[i64],
        ends: &[i64],
    ) -> Result<BurndownSeries, BurndownError> {
        self.aggregate(&ResolutionSpec::legacy(resolution_value), starts, ends)
    }
}

/// Compute a burndown series with the default configuration
///
/// **Public** - primary entry point for orchestration code
///
/// Instants are nanoseconds since the epoch.
///
/// # Example
/// ```
/// let series = burndown::compute_burndown("seconds", 5, &[0, 5_000_000_000], &[10_000_000_000, 15_000_000_000])?;
/// assert_eq!(series.active_counts, vec![1, 2, 1, 0]);
/// # Ok::<(), burndown::BurndownError>(())
/// ```
pub fn compute_burndown(
    resolution_unit: &str,
    resolution_value: i64,
    start_timestamps: &[i64],
    end_timestamps: &[i64],
) -> Result<BurndownSeries, BurndownError> {
    Aggregator::default().compute_burndown(
        resolution_unit,
        resolution_value,
        start_timestamps,
        end_timestamps,
    )
}

/// Compute a burndown series from a raw bucket duration
///
/// **Public** - kept for callers of the unit-less interface
///
/// # Example
/// ```
/// let (times, counts) = burndown::process_timestamps(5, &[0, 5], &[10, 15])?.into_parts();
/// assert_eq!(times, vec![0, 5, 10, 15]);
/// assert_eq!(counts, vec![1, 2, 1, 0]);
/// # Ok::<(), burndown::BurndownError>(())
/// ```
pub fn process_timestamps(
    resolution_value: i64,
    start_timestamps: &[i64],
    end_timestamps: &[i64],
) -> Result<BurndownSeries, BurndownError> {
    Aggregator::default().process_timestamps(resolution_value, start_timestamps, end_timestamps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_checked_before_lengths() {
        let err = process_timestamps(0, &[1, 2], &[3]).unwrap_err();
        assert_eq!(err, BurndownError::InvalidResolutionValue(0));
    }

    #[test]
    fn test_empty_input_keeps_bucket_duration() {
        let series = process_timestamps(7, &[], &[]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.bucket_duration, 7);
    }

    #[test]
    fn test_custom_time_base() {
        let aggregator = Aggregator::new(BurndownConfig::new().with_time_base(TimeBase::Seconds));
        let series = aggregator
            .compute_burndown("minutes", 1, &[0, 30], &[120, 90])
            .unwrap();
        assert_eq!(series.bucket_timestamps, vec![0, 60, 120]);
        assert_eq!(series.active_counts, vec![1, 2, 0]);
    }

    #[test]
    fn test_custom_ceiling() {
        let aggregator = Aggregator::new(BurndownConfig::new().with_max_buckets(2));
        let err = aggregator.process_timestamps(1, &[0], &[5]).unwrap_err();
        assert!(matches!(err, BurndownError::AxisTooLarge { buckets: 6, max: 2 }));
    }
}
