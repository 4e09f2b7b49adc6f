//! Build the bucket axis that covers every interval.
//!
//! The axis is anchored on a grid measured from instant 0:
//! `axis_start` is the minimum start floored to the grid and
//! `axis_end` is the maximum end ceiled to the grid.
//! All boundary arithmetic runs in i128 so that extreme instants
//! cannot overflow before the bucket ceiling is checked.

use crate::utils::error::BurndownError;
use log::debug;

/// Regular, ascending sequence of bucket instants
///
/// **Public** - consumed by the sweep and the assembler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    start: i64,
    step: i64,
    len: usize,
}

impl TimeAxis {
    /// First bucket instant
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last bucket instant
    pub fn end(&self) -> i64 {
        self.instant(self.len - 1)
    }

    /// Spacing between consecutive buckets
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of buckets (always at least one)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Instant of bucket `index`
    ///
    /// Every index below `len` fits in an i64 because the axis end was
    /// checked when the axis was built; the product alone may not.
    pub fn instant(&self, index: usize) -> i64 {
        (self.start as i128 + self.step as i128 * index as i128) as i64
    }

    /// Ascending iterator over every bucket instant
    pub fn instants(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.len).map(move |i| self.instant(i))
    }

    /// Index of the first bucket at or after `instant`
    ///
    /// May be negative (instant before the axis) or `>= len`
    /// (instant after the last bucket); callers clamp.
    pub fn index_at_or_after(&self, instant: i64) -> i128 {
        let offset = instant as i128 - self.start as i128;
        ceil_div(offset, self.step as i128)
    }
}

/// Build the axis for a set of intervals
///
/// **Public** - second stage of the pipeline
///
/// # Arguments
/// * `starts` - Start instants
/// * `ends` - End instants
/// * `bucket_duration` - Positive bucket spacing in base units
/// * `max_buckets` - Ceiling on the bucket count
///
/// # Returns
/// `None` when there are no intervals, otherwise the covering axis.
/// When every end lies before the earliest start the axis collapses to a
/// single bucket at `axis_start`.
///
/// # Errors
/// * `AxisTooLarge` - bucket count exceeds `max_buckets` or the axis
///   boundaries do not fit in an i64
pub fn build_axis(
    starts: &[i64],
    ends: &[i64],
    bucket_duration: i64,
    max_buckets: usize,
) -> Result<Option<TimeAxis>, BurndownError> {
    debug_assert!(bucket_duration > 0);

    let (Some(&min_start), Some(&max_end)) = (starts.iter().min(), ends.iter().max()) else {
        return Ok(None);
    };

    let step = bucket_duration as i128;
    let axis_start = floor_div(min_start as i128, step) * step;
    let axis_end = (ceil_div(max_end as i128, step) * step).max(axis_start);

    let buckets = ((axis_end - axis_start) / step + 1) as u128;
    if buckets > max_buckets as u128 {
        return Err(BurndownError::AxisTooLarge {
            buckets,
            max: max_buckets,
        });
    }

    let (Ok(start), Ok(_)) = (i64::try_from(axis_start), i64::try_from(axis_end)) else {
        return Err(BurndownError::AxisTooLarge {
            buckets,
            max: max_buckets,
        });
    };

    debug!(
        "Built axis: {} buckets from {} step {} (input range {}..{})",
        buckets, start, bucket_duration, min_start, max_end
    );

    Ok(Some(TimeAxis {
        start,
        step: bucket_duration,
        len: buckets as usize,
    }))
}

fn floor_div(value: i128, divisor: i128) -> i128 {
    value.div_euclid(divisor)
}

fn ceil_div(value: i128, divisor: i128) -> i128 {
    -(-value).div_euclid(divisor)
}
