//! Synthetic interval generation for benchmarks and demos.
//!
//! Intervals are scattered around an anchor instant. Each start is the
//! anchor shifted by a random number of weeks, days, hours, minutes and
//! seconds in `-spread..=spread`; each end follows its start by a random
//! non-negative span, with at least `min_span_hours` hours.
//! All instants are nanoseconds since the epoch.

use crate::schema::IntervalSet;
use crate::utils::config::{
    MAX_GENERATOR_SPREAD, NANOS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE, SECONDS_PER_WEEK,
};
use chrono::Utc;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Centre of the generated range (nanoseconds since epoch)
    pub anchor: i64,

    /// Maximum magnitude for each calendar component, clamped to
    /// `0..=MAX_GENERATOR_SPREAD`
    pub spread: i64,

    /// Minimum hours component of every span
    pub min_span_hours: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            anchor: Utc::now().timestamp_nanos_opt().unwrap_or_default(),
            spread: 50,
            min_span_hours: 10,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor: i64) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_spread(mut self, spread: i64) -> Self {
        self.spread = spread.clamp(0, MAX_GENERATOR_SPREAD);
        self
    }
}

/// Generate `count` random intervals
///
/// **Public** - main entry point for synthetic data
pub fn generate_intervals<R: Rng>(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> IntervalSet {
    let spread = config.spread.clamp(0, MAX_GENERATOR_SPREAD);
    let min_hours = config.min_span_hours.clamp(0, spread);
    let mut set = IntervalSet::with_capacity(count);

    for _ in 0..count {
        let offset = calendar_seconds(
            rng,
            [-spread..=spread, -spread..=spread, -spread..=spread, -spread..=spread, -spread..=spread],
        );
        let span = calendar_seconds(
            rng,
            [0..=spread, 0..=spread, min_hours..=spread, 0..=spread, 0..=spread],
        );

        // Saturates only when the anchor itself sits near the i64 bounds
        let start = config.anchor.saturating_add(offset * NANOS_PER_SECOND);
        set.push(start, start.saturating_add(span * NANOS_PER_SECOND));
    }

    set
}

/// Generate `jobs` independent datasets of `count` intervals each
///
/// **Public** - one dataset per batch job
///
/// With a seed every dataset is reproducible: job `i` uses `seed + i`.
pub fn generate_pool(
    jobs: usize,
    count: usize,
    config: &GeneratorConfig,
    seed: Option<u64>,
) -> Vec<IntervalSet> {
    debug!("Generating {} datasets of {} intervals", jobs, count);

    (0..jobs)
        .map(|job| {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(job as u64)),
                None => StdRng::from_entropy(),
            };
            generate_intervals(count, config, &mut rng)
        })
        .collect()
}

/// Sum random weeks, days, hours, minutes and seconds into seconds
///
/// **Private** - ranges are in that order
fn calendar_seconds<R: Rng>(
    rng: &mut R,
    ranges: [std::ops::RangeInclusive<i64>; 5],
) -> i64 {
    const SCALE: [i64; 5] = [
        SECONDS_PER_WEEK,
        SECONDS_PER_DAY,
        SECONDS_PER_HOUR,
        SECONDS_PER_MINUTE,
        1,
    ];

    ranges
        .into_iter()
        .zip(SCALE)
        .map(|(range, scale)| rng.gen_range(range) * scale)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_order() {
        let config = GeneratorConfig::new().with_anchor(0);
        let mut rng = StdRng::seed_from_u64(7);
        let set = generate_intervals(1_000, &config, &mut rng);

        assert_eq!(set.len(), 1_000);
        let min_span = 10 * SECONDS_PER_HOUR * NANOS_PER_SECOND;
        for (start, end) in set.start_timestamps.iter().zip(&set.end_timestamps) {
            assert!(end - start >= min_span);
        }
    }

    #[test]
    fn test_generate_within_spread() {
        let config = GeneratorConfig::new().with_anchor(0).with_spread(50);
        let mut rng = StdRng::seed_from_u64(1);
        let set = generate_intervals(500, &config, &mut rng);

        let bound = 50 * (SECONDS_PER_WEEK + SECONDS_PER_DAY + SECONDS_PER_HOUR + SECONDS_PER_MINUTE + 1)
            * NANOS_PER_SECOND;
        assert!(set.start_timestamps.iter().all(|s| s.abs() <= bound));
    }

    #[test]
    fn test_seeded_pool_is_reproducible() {
        let config = GeneratorConfig::new().with_anchor(1_700_000_000 * NANOS_PER_SECOND);
        let first = generate_pool(3, 50, &config, Some(42));
        let second = generate_pool(3, 50, &config, Some(42));

        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
    }

    #[test]
    fn test_large_spread_is_clamped() {
        let config = GeneratorConfig::new().with_anchor(0).with_spread(1_000_000_000);
        assert_eq!(config.spread, MAX_GENERATOR_SPREAD);

        let mut rng = StdRng::seed_from_u64(11);
        let set = generate_intervals(10, &config, &mut rng);
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_unclamped_fields_near_bounds_saturate() {
        let config = GeneratorConfig {
            anchor: i64::MAX,
            spread: i64::MAX,
            min_span_hours: i64::MAX,
        };
        let mut rng = StdRng::seed_from_u64(13);
        let set = generate_intervals(50, &config, &mut rng);

        for (start, end) in set.start_timestamps.iter().zip(&set.end_timestamps) {
            assert!(end >= start);
        }
    }

    #[test]
    fn test_zero_spread_is_constant() {
        let config = GeneratorConfig::new().with_anchor(5).with_spread(0);
        let mut rng = StdRng::seed_from_u64(3);
        let set = generate_intervals(4, &config, &mut rng);

        assert_eq!(set.start_timestamps, vec![5; 4]);
        assert_eq!(set.end_timestamps, vec![5; 4]);
    }
}
