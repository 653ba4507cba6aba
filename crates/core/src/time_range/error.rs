//! Time range validation errors.

use thiserror::Error;

/// A time range whose boundaries are out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeRangeError {
    /// Both ends are present and the end precedes the start.
    #[error("closed date is before opened date")]
    EndBeforeStart,
}

impl TimeRangeError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EndBeforeStart => "END_BEFORE_START",
        }
    }
}
