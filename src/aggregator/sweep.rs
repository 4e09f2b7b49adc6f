//! Sweep-line accumulation of active interval counts.
//!
//! Each interval registers +1 at the first bucket at or after its start and
//! -1 at the first bucket at or after its end. A left-to-right prefix sum
//! over those deltas yields, for every bucket instant `t`, the number of
//! intervals with `start <= t < end`.
//!
//! Cost is O(N + K) for N intervals and K buckets.

use super::axis::TimeAxis;
use log::debug;

/// Build the signed per-bucket delta array
///
/// **Public** - exposed so callers can inspect the raw events
///
/// Intervals with `end <= start` contribute nothing. A -1 that would land
/// past the last bucket is dropped because it cancels outside the axis.
///
/// # Arguments
/// * `axis` - Axis covering the intervals
/// * `starts` / `ends` - Aligned interval bounds (same length)
pub fn accumulate_deltas(axis: &TimeAxis, starts: &[i64], ends: &[i64]) -> Vec<i64> {
    debug_assert_eq!(starts.len(), ends.len());

    let len = axis.len();
    let mut deltas = vec![0i64; len];
    let mut skipped = 0usize;

    for (&start, &end) in starts.iter().zip(ends) {
        if end <= start {
            skipped += 1;
            continue;
        }

        let open = clamp_index(axis.index_at_or_after(start), len);
        let close = clamp_index(axis.index_at_or_after(end), len);

        // No bucket instant falls inside [start, end)
        if open >= close {
            continue;
        }

        deltas[open] += 1;
        if close < len {
            deltas[close] -= 1;
        }
    }

    if skipped > 0 {
        debug!("Skipped {} intervals with end <= start", skipped);
    }

    deltas
}

/// Turn per-bucket deltas into running active counts, in place
///
/// **Public** - final step of the sweep
pub fn prefix_sum(mut deltas: Vec<i64>) -> Vec<i64> {
    let mut running = 0i64;
    for slot in deltas.iter_mut() {
        running += *slot;
        *slot = running;
    }
    deltas
}

/// Compute active counts for every bucket of `axis`
///
/// **Public** - main entry point of the sweep stage
pub fn sweep(axis: &TimeAxis, starts: &[i64], ends: &[i64]) -> Vec<i64> {
    prefix_sum(accumulate_deltas(axis, starts, ends))
}

/// Clamp a raw bucket index into `0..=len`
///
/// **Private** - `len` itself means "past the last bucket"
fn clamp_index(index: i128, len: usize) -> usize {
    index.clamp(0, len as i128) as usize
}
