//! Balance error types.

use coffer_shared::MoneyError;
use thiserror::Error;

/// Errors raised by a single balance or a set of balances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// The balance is dated at the zero timestamp.
    #[error("date of balance is zero")]
    ZeroDate,

    /// The money of the balance is unusable.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// An aggregate query was run over no balances.
    #[error("empty balances")]
    EmptyBalances,
}

impl BalanceError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroDate => "BALANCE_ZERO_DATE",
            Self::Money(inner) => inner.error_code(),
            Self::EmptyBalances => "EMPTY_BALANCES",
        }
    }
}
