//! Shared error types.

use std::fmt;

use thiserror::Error;

use crate::types::Code;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by currency codes and money arithmetic.
///
/// `NoCurrency` and `CurrencyMismatch` are kept apart so a caller can tell
/// "ask for a currency" from "reject the operation".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not exactly 3 characters.
    #[error("invalid currency code length ({length})")]
    InvalidCodeLength {
        /// Number of characters in the rejected code.
        length: usize,
    },

    /// An operation needed a currency but the money has none.
    #[error("currency is not set")]
    NoCurrency,

    /// Two monies carry different currencies.
    #[error("currency mismatch: {a}, {b}")]
    CurrencyMismatch {
        /// Currency of the first operand.
        a: Code,
        /// Currency of the second operand.
        b: Code,
    },

    /// Adding the two amounts overflows `i64`.
    #[error("amount overflow adding {a} and {b}")]
    AmountOverflow {
        /// First amount.
        a: i64,
        /// Second amount.
        b: i64,
    },
}

impl MoneyError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCodeLength { .. } => "INVALID_CURRENCY_CODE",
            Self::NoCurrency => "NO_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}

/// A value that failed validation, returned together with the reason.
///
/// Construction never throws away what was built: the caller decides whether
/// to inspect, repair, or drop the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected<T, E> {
    value: T,
    error: E,
}

impl<T, E> Rejected<T, E> {
    /// Pairs a value with the error found while validating it.
    pub const fn new(value: T, error: E) -> Self {
        Self { value, error }
    }

    /// The value as it was built.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// The validation failure.
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Drops the value, keeping the error.
    pub fn into_error(self) -> E {
        self.error
    }

    /// Splits into the value and the error.
    pub fn into_parts(self) -> (T, E) {
        (self.value, self.error)
    }
}

impl<T, E: fmt::Display> fmt::Display for Rejected<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<T: fmt::Debug, E: std::error::Error + 'static> std::error::Error for Rejected<T, E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}
