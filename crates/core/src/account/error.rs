//! Account error types.
//!
//! `FieldError` aggregates every fault found on an account, in a fixed order,
//! so a caller can report them all at once. `BalanceValidationError` is what
//! checking a balance against an account returns; lower-level errors pass
//! through it unchanged.

use std::fmt;

use coffer_shared::types::Timestamp;
use thiserror::Error;

use crate::balance::BalanceError;
use crate::time_range::{TimeRange, TimeRangeError};

/// A single fault with an account's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountFault {
    /// Name is empty after trimming whitespace.
    #[error("empty name")]
    EmptyName,

    /// Closed date precedes opened date.
    #[error(transparent)]
    TimeRange(#[from] TimeRangeError),

    /// Opened date is missing or the zero timestamp.
    #[error("no opened date given")]
    ZeroDateOpened,

    /// Closed date is present but is the zero timestamp.
    #[error("closed date marked as present but not set")]
    ZeroValidDateClosed,
}

/// Every fault found on an account, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldError(Vec<AccountFault>);

impl FieldError {
    /// Wraps a list of faults.
    #[must_use]
    pub const fn new(faults: Vec<AccountFault>) -> Self {
        Self(faults)
    }

    /// The faults, in check order.
    #[must_use]
    pub fn faults(&self) -> &[AccountFault] {
        &self.0
    }

    /// The fault descriptions, in check order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Returns true if `fault` was found.
    #[must_use]
    pub fn contains(&self, fault: AccountFault) -> bool {
        self.0.contains(&fault)
    }

    /// Number of faults.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no fault was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        "ACCOUNT_FIELD_ERROR"
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccountFieldError: ")?;
        for (index, fault) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{fault}.")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

impl From<Vec<AccountFault>> for FieldError {
    fn from(faults: Vec<AccountFault>) -> Self {
        Self(faults)
    }
}

/// Errors from checking a balance against an account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceValidationError {
    /// The account itself is invalid; the balance was not checked.
    #[error(transparent)]
    Account(#[from] FieldError),

    /// The balance itself is invalid.
    #[error(transparent)]
    Balance(#[from] BalanceError),

    /// The balance is dated outside the account's time range.
    #[error("balance date {balance_date} is outside of account time range {account_time_range}")]
    DateOutOfAccountTimeRange {
        /// Date of the rejected balance.
        balance_date: Timestamp,
        /// Time range of the account.
        account_time_range: TimeRange,
    },
}

impl BalanceValidationError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Account(inner) => inner.error_code(),
            Self::Balance(inner) => inner.error_code(),
            Self::DateOutOfAccountTimeRange { .. } => "BALANCE_DATE_OUT_OF_RANGE",
        }
    }
}
