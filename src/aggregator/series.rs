//! Burndown series: aligned bucket instants and active counts.

use super::axis::TimeAxis;
use serde::{Deserialize, Serialize};

/// Output of one aggregation
///
/// **Public** - returned from compute_burndown
///
/// `bucket_timestamps` is strictly increasing with constant step
/// `bucket_duration`; `active_counts[i]` belongs to `bucket_timestamps[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BurndownSeries {
    /// Bucket spacing in base units
    pub bucket_duration: i64,

    /// Bucket instants, ascending
    pub bucket_timestamps: Vec<i64>,

    /// Active interval count at each bucket
    pub active_counts: Vec<i64>,
}

impl BurndownSeries {
    /// Series with no buckets
    pub fn empty(bucket_duration: i64) -> Self {
        Self {
            bucket_duration,
            bucket_timestamps: Vec::new(),
            active_counts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bucket_timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bucket_timestamps.is_empty()
    }

    /// Iterate `(bucket_time, active_count)` pairs in time order
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.bucket_timestamps
            .iter()
            .copied()
            .zip(self.active_counts.iter().copied())
    }

    /// Split into `(bucket_timestamps, active_counts)`
    pub fn into_parts(self) -> (Vec<i64>, Vec<i64>) {
        (self.bucket_timestamps, self.active_counts)
    }

    /// Earliest bucket holding the highest active count
    pub fn peak(&self) -> Option<(i64, i64)> {
        self.iter()
            .fold(None, |best: Option<(i64, i64)>, (time, count)| match best {
                Some((_, top)) if top >= count => best,
                _ => Some((time, count)),
            })
    }
}

/// Zip the axis and the swept counts into a series
///
/// **Public** - last stage of the pipeline
///
/// The axis is already ascending, so no sort is needed.
pub fn assemble(axis: &TimeAxis, active_counts: Vec<i64>) -> BurndownSeries {
    debug_assert_eq!(axis.len(), active_counts.len());

    BurndownSeries {
        bucket_duration: axis.step(),
        bucket_timestamps: axis.instants().collect(),
        active_counts,
    }
}
