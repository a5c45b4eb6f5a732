//! Date intervals
//!
//! A span between two instants. Construction performs no normalization: a
//! degenerate interval (end before start) keeps its endpoints and reports
//! a negative duration, and queries on it behave however the endpoint
//! arithmetic falls out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::datetime;

/// A span between two instants, ordered by start and then end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateInterval {
    /// Interval between two instants, kept exactly as given.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Interval starting at an instant and extending for a duration in
    /// seconds. Negative durations produce a degenerate interval.
    pub fn with_duration(start: DateTime<Utc>, seconds: f64) -> Self {
        Self {
            start,
            end: datetime::date_since(start, seconds),
        }
    }

    /// Zero-length interval at an instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            start: instant,
            end: instant,
        }
    }

    /// Length in seconds, negative when degenerate.
    #[must_use]
    pub fn duration(&self) -> f64 {
        datetime::duration_to_seconds(self.end.signed_duration_since(self.start))
    }

    /// True when the instant lies within the interval, endpoints included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// True when the two intervals share at least one instant.
    pub fn intersects(&self, other: &DateInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Overlap of two intervals. `None` when they are disjoint.
    pub fn intersection(&self, other: &DateInterval) -> Option<DateInterval> {
        if !self.intersects(other) {
            return None;
        }
        Some(DateInterval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}
