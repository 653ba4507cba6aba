//! Timestamp helpers.
//!
//! Every date in Coffer is a `DateTime<Utc>`. A missing boundary is
//! `Option<DateTime<Utc>>`, never a sentinel. The "zero" timestamp is
//! `0001-01-01T00:00:00Z`, which is what an unset timestamp looks like in
//! serialized data, and it is always rejected where a real date is required.

use chrono::{DateTime, Utc};

/// A point in time, always in UTC.
pub type Timestamp = DateTime<Utc>;

/// Seconds between the zero timestamp and the Unix epoch.
pub const ZERO_TIMESTAMP_SECS: i64 = -62_135_596_800;

/// Detects the zero timestamp.
pub trait ZeroTime {
    /// Returns true if this is `0001-01-01T00:00:00Z`.
    fn is_zero(&self) -> bool;
}

impl ZeroTime for Timestamp {
    fn is_zero(&self) -> bool {
        self.timestamp() == ZERO_TIMESTAMP_SECS && self.timestamp_subsec_nanos() == 0
    }
}

/// Returns the zero timestamp.
#[must_use]
pub fn zero_timestamp() -> Timestamp {
    // The constant is within chrono's supported range.
    DateTime::from_timestamp(ZERO_TIMESTAMP_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}
