//! Money type with an integer minor-unit amount and an optional currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `i64` minor units (pence, cents); `rust_decimal` is only used
//! to render them.
//!
//! There is no implicit conversion between currencies. Every operation that
//! combines two monies checks both currencies first and fails with
//! [`MoneyError::NoCurrency`] or [`MoneyError::CurrencyMismatch`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Code;
use crate::error::{MoneyError, MoneyResult};

/// A monetary amount, with or without a currency.
///
/// `Money::default()` is an uncurrencied zero. It is safe to hold and
/// inspect, but any currency-checked operation on it reports
/// [`MoneyError::NoCurrency`].
///
/// The derived `PartialEq` compares representations. Use [`Money::equal`]
/// for the currency-checked comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoneyRecord", try_from = "MoneyRecord")]
pub enum Money {
    /// An amount with no currency assigned.
    Uncurrencied {
        /// Amount in minor units.
        amount: i64,
    },
    /// An amount in a known currency.
    Currencied {
        /// Amount in minor units.
        amount: i64,
        /// Currency of the amount.
        currency: Code,
    },
}

impl Default for Money {
    fn default() -> Self {
        Self::Uncurrencied { amount: 0 }
    }
}

impl Money {
    /// Creates money from an amount and a currency string.
    ///
    /// The currency is upper-cased. An empty string gives an uncurrencied
    /// value; any other string must be 3 characters long.
    pub fn new(amount: i64, currency: &str) -> MoneyResult<Self> {
        if currency.is_empty() {
            return Ok(Self::Uncurrencied { amount });
        }
        let currency = Code::new(currency.to_uppercase())?;
        Ok(Self::Currencied { amount, currency })
    }

    /// Creates money in an already validated currency.
    #[must_use]
    pub const fn in_currency(amount: i64, currency: Code) -> Self {
        Self::Currencied { amount, currency }
    }

    /// Creates money in pounds sterling.
    #[must_use]
    pub fn gbp(amount: i64) -> Self {
        Self::in_currency(amount, Code::gbp())
    }

    /// Amount in minor units, e.g. 4567 for £45.67.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        match self {
            Self::Uncurrencied { amount } | Self::Currencied { amount, .. } => *amount,
        }
    }

    /// Returns the currency, or `NoCurrency` if none was set.
    pub fn currency(&self) -> MoneyResult<&Code> {
        match self {
            Self::Currencied { currency, .. } => Ok(currency),
            Self::Uncurrencied { .. } => Err(MoneyError::NoCurrency),
        }
    }

    /// Fails with `NoCurrency` if the money has no currency.
    pub fn validate(&self) -> MoneyResult<()> {
        self.currency().map(|_| ())
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount() == 0
    }

    /// Returns true if `self` and every money in `others` share one currency.
    ///
    /// The first money without a currency aborts the check with `NoCurrency`.
    pub fn same_currency(&self, others: &[Self]) -> MoneyResult<bool> {
        let found = currencies(std::iter::once(self).chain(others))?;
        Ok(found.len() < 2)
    }

    /// Currency-checked equality.
    ///
    /// Both sides must have a currency, even when the amounts are equal; two
    /// uncurrencied placeholders are never silently equal.
    pub fn equal(&self, other: &Self) -> MoneyResult<bool> {
        let same_currency = self.same_currency(std::slice::from_ref(other))?;
        Ok(same_currency && self.amount() == other.amount())
    }

    /// Adds two monies of the same currency, returning a new value.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        let a = self.currency()?;
        let b = other.currency()?;
        if a != b {
            return Err(MoneyError::CurrencyMismatch {
                a: a.clone(),
                b: b.clone(),
            });
        }
        let amount = self
            .amount()
            .checked_add(other.amount())
            .ok_or(MoneyError::AmountOverflow {
                a: self.amount(),
                b: other.amount(),
            })?;
        Ok(Self::in_currency(amount, a.clone()))
    }

    /// The amount in major units, e.g. 45.67 for 4567 pence.
    ///
    /// Uncurrencied amounts are assumed to have two decimal places.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        let exponent = match self {
            Self::Currencied { currency, .. } => currency.minor_unit_exponent(),
            Self::Uncurrencied { .. } => 2,
        };
        Decimal::new(self.amount(), exponent)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Currencied { currency, .. } => write!(f, "{currency} {}", self.to_decimal()),
            Self::Uncurrencied { .. } => write!(f, "{}", self.to_decimal()),
        }
    }
}

/// Distinct currencies of `moneys`, in first-seen order.
pub fn currencies<'a>(moneys: impl IntoIterator<Item = &'a Money>) -> MoneyResult<Vec<&'a Code>> {
    let mut found: Vec<&Code> = Vec::new();
    for money in moneys {
        let currency = money.currency()?;
        if !found.contains(&currency) {
            found.push(currency);
        }
    }
    Ok(found)
}

/// Wire form of [`Money`]. A missing currency is written as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Amount in minor units.
    pub amount: i64,
    /// Currency code, or empty.
    #[serde(default)]
    pub currency: String,
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        match money {
            Money::Uncurrencied { amount } => Self {
                amount,
                currency: String::new(),
            },
            Money::Currencied { amount, currency } => Self {
                amount,
                currency: currency.to_string(),
            },
        }
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::new(record.amount, &record.currency)
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "money_props.rs"]
mod props;
