//! Time range type.

use std::fmt;

use coffer_shared::types::Timestamp;
use serde::{Deserialize, Serialize};

use super::error::TimeRangeError;

/// A span of time that may be open at either or both ends.
///
/// `None` means unbounded on that side. Containment is half-open: the start
/// is inclusive and the end is exclusive.
///
/// Equality (`==`) compares presence and instant of both boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive lower bound.
    pub start: Option<Timestamp>,
    /// Exclusive upper bound.
    pub end: Option<Timestamp>,
}

impl TimeRange {
    /// Creates a range from optional boundaries without validating it.
    #[must_use]
    pub const fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        Self { start, end }
    }

    /// A range open at both ends.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Fails if both ends are present and the end is before the start.
    ///
    /// An absent boundary never fails. Equal boundaries are allowed.
    pub fn validate(&self) -> Result<(), TimeRangeError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end < start => Err(TimeRangeError::EndBeforeStart),
            _ => Ok(()),
        }
    }

    /// Returns true if `time` is on or after the start and before the end.
    #[must_use]
    pub fn contains(&self, time: Timestamp) -> bool {
        if self.start.is_some_and(|start| time < start) {
            return false;
        }
        if self.end.is_some_and(|end| time >= end) {
            return false;
        }
        true
    }

    /// Returns true if the range has no end.
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "[{}, ", start.to_rfc3339())?,
            None => f.write_str("(unbounded, ")?,
        }
        match self.end {
            Some(end) => write!(f, "{})", end.to_rfc3339()),
            None => f.write_str("open)"),
        }
    }
}
