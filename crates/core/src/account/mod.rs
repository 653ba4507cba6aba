//! Named, time-bounded accounts.
//!
//! This module implements:
//! - Account construction with options and immediate self-validation
//! - Multi-fault field validation in a fixed order
//! - Cross-validation of a balance date against the account's time range
//! - Error types for account operations

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;
#[cfg(test)]
mod validation_props;

pub use error::{AccountFault, BalanceValidationError, FieldError};
pub use types::{Account, AccountOptions, AccountRecord, Accounts};
