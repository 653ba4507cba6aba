//! JSON decoding that keeps domain errors typed.
//!
//! `serde_json::from_str::<Account>` works too, but folds a validation failure
//! into a `serde_json::Error`. These helpers parse the wire record first and
//! then validate, so a caller can match on the same error values that direct
//! construction returns.

use coffer_shared::types::MoneyRecord;
use coffer_shared::{Money, MoneyError};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::account::{Account, AccountRecord, FieldError};
use crate::balance::{Balance, BalanceError, BalanceRecord, Balances};

/// Errors from decoding a JSON document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not JSON of the expected shape.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The money is invalid.
    #[error(transparent)]
    Money(MoneyError),

    /// The balance is invalid.
    #[error(transparent)]
    Balance(BalanceError),

    /// The account is invalid.
    #[error(transparent)]
    Account(FieldError),
}

impl DecodeError {
    /// Returns a stable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Json(_) => "MALFORMED_JSON",
            Self::Money(inner) => inner.error_code(),
            Self::Balance(inner) => inner.error_code(),
            Self::Account(inner) => inner.error_code(),
        }
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

/// Decodes and validates a money value.
pub fn money_from_json(json: &str) -> Result<Money, DecodeError> {
    let record: MoneyRecord = parse(json)?;
    Money::try_from(record).map_err(DecodeError::Money)
}

/// Decodes and validates a balance.
pub fn balance_from_json(json: &str) -> Result<Balance, DecodeError> {
    let record: BalanceRecord = parse(json)?;
    Balance::try_from(record).map_err(DecodeError::Balance)
}

/// Decodes and validates a JSON array of balances, stopping at the first
/// invalid one.
pub fn balances_from_json(json: &str) -> Result<Balances, DecodeError> {
    let records: Vec<BalanceRecord> = parse(json)?;
    records
        .into_iter()
        .map(|record| Balance::try_from(record).map_err(DecodeError::Balance))
        .collect()
}

/// Decodes and validates an account.
pub fn account_from_json(json: &str) -> Result<Account, DecodeError> {
    let record: AccountRecord = parse(json)?;
    Account::try_from(record).map_err(DecodeError::Account)
}
