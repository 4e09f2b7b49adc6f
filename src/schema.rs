//! JSON schema definitions for interval inputs and series outputs.
//!
//! Series documents are versioned to allow future evolution.

use crate::aggregator::{BurndownSeries, ResolutionSpec};
use serde::{Deserialize, Serialize};

/// One dataset: aligned start and end instants
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntervalSet {
    pub start_timestamps: Vec<i64>,
    pub end_timestamps: Vec<i64>,
}

impl IntervalSet {
    pub fn new(start_timestamps: Vec<i64>, end_timestamps: Vec<i64>) -> Self {
        Self {
            start_timestamps,
            end_timestamps,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity), Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, start: i64, end: i64) {
        self.start_timestamps.push(start);
        self.end_timestamps.push(end);
    }

    /// Number of intervals (the shorter side if the columns are misaligned)
    pub fn len(&self) -> usize {
        self.start_timestamps.len().min(self.end_timestamps.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(i64, i64)> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        let (start_timestamps, end_timestamps) = iter.into_iter().unzip();
        Self::new(start_timestamps, end_timestamps)
    }
}

/// Top-level series structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Resolution the series was computed at
    pub resolution: ResolutionSpec,

    /// Number of input intervals
    pub interval_count: usize,

    /// The computed series
    pub series: BurndownSeries,

    /// RFC 3339 rendering of each bucket (nanosecond inputs only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_dates: Option<Vec<String>>,

    /// Timestamp when the document was generated
    pub generated_at: String,
}
