//! Configuration and constants for the aggregator and the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default ceiling on the number of buckets a single axis may hold.
/// One i64 delta per bucket, so 10^8 buckets is ~800 MB.
pub const DEFAULT_MAX_BUCKETS: usize = 100_000_000;

// Unit durations expressed in seconds.
// Months and years are fixed approximations, not calendar-aware.
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
pub const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

// Generator defaults, matching the ranges of the benchmark driver
pub const DEFAULT_JOBS: usize = 500;
pub const DEFAULT_ISSUES_PER_JOB: usize = 5_000;
pub const DEFAULT_MAX_WORKERS: usize = 24;

/// Largest generator spread; 5_000 of every calendar component is
/// ~3.5e18 ns, so an offset plus a span still fits in an i64
pub const MAX_GENERATOR_SPREAD: i64 = 5_000;

/// Maximum jobs accepted by the bench command
pub const MAX_JOBS: usize = 100_000;
