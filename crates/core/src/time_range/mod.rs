//! Time ranges with optional boundaries.

pub mod error;
pub mod range;

#[cfg(test)]
mod range_props;

pub use error::TimeRangeError;
pub use range::TimeRange;
