//! Common value types used across the workspace.

pub mod currency;
pub mod money;
pub mod timestamp;

pub use currency::Code;
pub use money::{Money, MoneyRecord, currencies};
pub use timestamp::{Timestamp, ZeroTime, zero_timestamp};
