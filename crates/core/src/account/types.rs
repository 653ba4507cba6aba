//! Account types.

use std::fmt;

use coffer_shared::types::{Timestamp, ZeroTime};
use coffer_shared::Rejected;
use serde::{Deserialize, Serialize};

use super::error::FieldError;
use crate::time_range::TimeRange;

/// Optional settings applied by [`Account::new`] before validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountOptions {
    /// When set, the account is closed at this time. A zero timestamp is
    /// ignored and leaves the account open.
    pub close_time: Option<Timestamp>,
}

impl AccountOptions {
    /// Options for an account closed at `time`.
    #[must_use]
    pub const fn closed_at(time: Timestamp) -> Self {
        Self {
            close_time: Some(time),
        }
    }
}

/// A named account, open over a time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AccountRecord", try_from = "AccountRecord")]
pub struct Account {
    name: String,
    time_range: TimeRange,
}

impl Account {
    /// Creates an account opened at `opened`, applies `options`, then
    /// validates it.
    ///
    /// On failure the built account is returned inside the rejection along
    /// with every fault found.
    pub fn new(
        name: impl Into<String>,
        opened: Timestamp,
        options: AccountOptions,
    ) -> Result<Self, Rejected<Self, FieldError>> {
        let mut account = Self {
            name: name.into(),
            time_range: TimeRange::new(Some(opened), None),
        };
        if let Some(close_time) = options.close_time.filter(|time| !time.is_zero()) {
            account.time_range.end = Some(close_time);
        }
        match account.validate() {
            Ok(()) => Ok(account),
            Err(err) => Err(Rejected::new(account, err)),
        }
    }

    /// Builds an account from stored parts without validating it.
    pub(crate) const fn from_parts(name: String, time_range: TimeRange) -> Self {
        Self { name, time_range }
    }

    /// Account name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the account was opened, if known.
    #[must_use]
    pub const fn start(&self) -> Option<Timestamp> {
        self.time_range.start
    }

    /// When the account was closed, if it has been.
    #[must_use]
    pub const fn end(&self) -> Option<Timestamp> {
        self.time_range.end
    }

    /// The span the account is open over.
    #[must_use]
    pub const fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Returns true if the account has no closing time.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.time_range.end.is_none()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.time_range)
    }
}

/// Wire form of [`Account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Account name.
    pub name: String,
    /// Opening time.
    #[serde(default)]
    pub start: Option<Timestamp>,
    /// Closing time, `null` while open.
    #[serde(default)]
    pub end: Option<Timestamp>,
}

impl From<Account> for AccountRecord {
    fn from(account: Account) -> Self {
        Self {
            name: account.name,
            start: account.time_range.start,
            end: account.time_range.end,
        }
    }
}

impl TryFrom<AccountRecord> for Account {
    type Error = FieldError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let account = Self::from_parts(record.name, TimeRange::new(record.start, record.end));
        account.validate()?;
        Ok(account)
    }
}

/// A list of accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accounts(Vec<Account>);

impl Accounts {
    /// The accounts that have not been closed.
    pub fn open(&self) -> impl Iterator<Item = &Account> {
        self.0.iter().filter(|account| account.is_open())
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.0.iter()
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Account>> for Accounts {
    fn from(accounts: Vec<Account>) -> Self {
        Self(accounts)
    }
}

impl FromIterator<Account> for Accounts {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
