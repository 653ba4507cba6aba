//! Ordered sets of balances and their aggregates.

use coffer_shared::{Money, MoneyResult};
use serde::{Deserialize, Serialize};

use super::error::BalanceError;
use super::types::Balance;

/// An ordered sequence of balances.
///
/// Order only matters for tie-breaks: [`Balances::earliest`] keeps the first
/// of equally dated balances, [`Balances::latest`] keeps the last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balances(Vec<Balance>);

impl Balances {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a balance.
    pub fn push(&mut self, balance: Balance) {
        self.0.push(balance);
    }

    /// Number of balances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no balances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Balance> {
        self.0.iter()
    }

    /// Sums the money of every balance.
    ///
    /// An empty set sums to an uncurrencied zero. Otherwise the first
    /// currency error stops the sum.
    pub fn sum(&self) -> MoneyResult<Money> {
        let mut balances = self.0.iter();
        let Some(first) = balances.next() else {
            return Ok(Money::default());
        };
        balances.try_fold(first.money().clone(), |total, balance| {
            total.add(balance.money())
        })
    }

    /// The earliest dated balance; the first one wins a tie.
    pub fn earliest(&self) -> Result<&Balance, BalanceError> {
        self.0
            .iter()
            .reduce(|earliest, balance| {
                if balance.date() < earliest.date() {
                    balance
                } else {
                    earliest
                }
            })
            .ok_or(BalanceError::EmptyBalances)
    }

    /// The latest dated balance; the last one wins a tie.
    pub fn latest(&self) -> Result<&Balance, BalanceError> {
        self.0
            .iter()
            .reduce(|latest, balance| {
                if balance.date() >= latest.date() {
                    balance
                } else {
                    latest
                }
            })
            .ok_or(BalanceError::EmptyBalances)
    }
}

impl From<Vec<Balance>> for Balances {
    fn from(balances: Vec<Balance>) -> Self {
        Self(balances)
    }
}

impl FromIterator<Balance> for Balances {
    fn from_iter<I: IntoIterator<Item = Balance>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Balances {
    type Item = Balance;
    type IntoIter = std::vec::IntoIter<Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a Balance;
    type IntoIter = std::slice::Iter<'a, Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
