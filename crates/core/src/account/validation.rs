//! Account validation and balance cross-checks.

use coffer_shared::types::ZeroTime;
use tracing::{debug, trace};

use super::error::{AccountFault, BalanceValidationError, FieldError};
use super::types::Account;
use crate::balance::Balance;

impl Account {
    /// Checks the account's own fields.
    ///
    /// Every applicable fault is collected, always in this order: empty
    /// name, end before start, missing or zero start, zero end.
    pub fn validate(&self) -> Result<(), FieldError> {
        let mut faults = Vec::new();
        if self.name().trim().is_empty() {
            faults.push(AccountFault::EmptyName);
        }
        if let Err(err) = self.time_range().validate() {
            faults.push(AccountFault::TimeRange(err));
        }
        if self.start().is_none_or(|start| start.is_zero()) {
            faults.push(AccountFault::ZeroDateOpened);
        }
        if self.end().is_some_and(|end| end.is_zero()) {
            faults.push(AccountFault::ZeroValidDateClosed);
        }

        if faults.is_empty() {
            return Ok(());
        }
        debug!(
            account = %self.name(),
            fault_count = faults.len(),
            "Account failed validation"
        );
        Err(FieldError::new(faults))
    }

    /// Checks a balance against the account.
    ///
    /// The account is validated first and its error returned as-is; then the
    /// balance on its own. Only when both are valid is the balance date
    /// checked against the account's time range. A balance dated exactly at
    /// the closing time is accepted as the closing balance, although the
    /// range itself excludes its end.
    pub fn validate_balance(&self, balance: &Balance) -> Result<(), BalanceValidationError> {
        self.validate()?;
        balance.validate()?;

        let date = balance.date();
        let is_closing_balance = self.end() == Some(date);
        if !self.time_range().contains(date) && !is_closing_balance {
            debug!(
                account = %self.name(),
                balance_date = %date,
                "Balance date outside account time range"
            );
            return Err(BalanceValidationError::DateOutOfAccountTimeRange {
                balance_date: date,
                account_time_range: self.time_range(),
            });
        }

        trace!(account = %self.name(), balance_date = %date, "Balance accepted");
        Ok(())
    }
}
