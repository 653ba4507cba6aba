//! Core domain rules for Coffer.
//!
//! This crate contains pure validation logic with ZERO I/O dependencies.
//! Values are built, validated, and compared synchronously in memory.
//!
//! # Modules
//!
//! - `time_range` - Intervals with optional boundaries
//! - `balance` - Dated money observations and their aggregates
//! - `account` - Named, time-bounded accounts and balance cross-checks
//! - `codec` - JSON decoding that keeps domain errors typed

pub mod account;
pub mod balance;
pub mod codec;
pub mod time_range;

pub use account::{Account, AccountOptions, BalanceValidationError, FieldError};
pub use balance::{Balance, BalanceError, Balances};
pub use time_range::{TimeRange, TimeRangeError};
