//! Balance value type.

use coffer_shared::types::{Money, MoneyRecord, Timestamp, ZeroTime};
use coffer_shared::Rejected;
use serde::{Deserialize, Serialize};

use super::error::BalanceError;

/// Money observed on a date.
///
/// Immutable once built. Use [`Balance::equal`] to compare; it applies the
/// currency-checked money comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BalanceRecord", try_from = "BalanceRecord")]
pub struct Balance {
    date: Timestamp,
    money: Money,
}

impl Balance {
    /// Creates a balance.
    ///
    /// Fails if the money has no currency or the date is the zero timestamp.
    /// The attempted balance is handed back inside the rejection.
    pub fn new(date: Timestamp, money: Money) -> Result<Self, Rejected<Self, BalanceError>> {
        let balance = Self { date, money };
        if let Err(err) = balance.money.validate() {
            return Err(Rejected::new(balance, err.into()));
        }
        match balance.validate() {
            Ok(()) => Ok(balance),
            Err(err) => Err(Rejected::new(balance, err)),
        }
    }

    /// Date of the observation.
    #[must_use]
    pub const fn date(&self) -> Timestamp {
        self.date
    }

    /// Observed money.
    #[must_use]
    pub const fn money(&self) -> &Money {
        &self.money
    }

    /// Fails with `ZeroDate` if the balance is dated at the zero timestamp.
    pub fn validate(&self) -> Result<(), BalanceError> {
        if self.date.is_zero() {
            return Err(BalanceError::ZeroDate);
        }
        Ok(())
    }

    /// Returns true if the dates match and the monies are equal.
    ///
    /// A money comparison error (missing currency) counts as not equal.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.date == other.date && self.money.equal(&other.money) == Ok(true)
    }
}

/// Wire form of [`Balance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Date of the observation.
    pub date: Timestamp,
    /// Observed money.
    pub money: MoneyRecord,
}

impl From<Balance> for BalanceRecord {
    fn from(balance: Balance) -> Self {
        Self {
            date: balance.date,
            money: balance.money.into(),
        }
    }
}

impl TryFrom<BalanceRecord> for Balance {
    type Error = BalanceError;

    fn try_from(record: BalanceRecord) -> Result<Self, Self::Error> {
        let money = Money::try_from(record.money)?;
        Self::new(record.date, money).map_err(Rejected::into_error)
    }
}
