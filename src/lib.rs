//! Burndown
//!
//! Sweep-line aggregation of `(start, end)` intervals into a
//! fixed-resolution time series of active counts: for each bucket
//! instant `t`, how many intervals satisfy `start <= t < end`.
//!
//! ## Getting Started
//!
//! ```
//! let series = burndown::process_timestamps(5, &[0, 5], &[10, 15])?;
//! assert_eq!(series.bucket_timestamps, vec![0, 5, 10, 15]);
//! assert_eq!(series.active_counts, vec![1, 2, 1, 0]);
//! # Ok::<(), burndown::BurndownError>(())
//! ```
//!
//! The `burndown` CLI wraps the same engine:
//!
//! ```bash
//! burndown compute --input intervals.json --unit days --value 1 --summary
//! burndown bench --jobs 500 --issues 5000 --workers 24
//! ```

pub mod aggregator;
pub mod commands;
pub mod generator;
pub mod output;
pub mod pool;
pub mod schema;
pub mod utils;

pub use aggregator::{
    compute_burndown, process_timestamps, Aggregator, BurndownConfig, BurndownSeries,
    ResolutionSpec, ResolutionUnit, TimeBase,
};
pub use schema::IntervalSet;
pub use utils::error::BurndownError;
