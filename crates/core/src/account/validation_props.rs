//! Property-based tests for balance cross-validation.

use chrono::{DateTime, Utc};
use coffer_shared::Money;
use coffer_shared::types::Timestamp;
use proptest::prelude::*;

use super::error::BalanceValidationError;
use super::types::{Account, AccountOptions};
use crate::balance::Balance;

/// Strategy to generate a timestamp between 1970 and 2100.
fn timestamp_strategy() -> impl Strategy<Value = Timestamp> {
    (0i64..4_102_444_800i64).prop_map(|secs| DateTime::<Utc>::from_timestamp(secs, 0).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// An open account accepts every balance dated on or after its start.
    #[test]
    fn prop_open_account_accepts_from_start(
        opened in timestamp_strategy(),
        date in timestamp_strategy(),
    ) {
        let account = Account::new("Open", opened, AccountOptions::default()).unwrap();
        let balance = Balance::new(date, Money::gbp(1)).unwrap();
        let result = account.validate_balance(&balance);
        prop_assert_eq!(result.is_ok(), date >= opened);
    }

    /// A closed account accepts balances from its start up to and including its end.
    #[test]
    fn prop_closed_account_accepts_through_close(
        first in timestamp_strategy(),
        second in timestamp_strategy(),
        date in timestamp_strategy(),
    ) {
        let (opened, closed) = if first <= second { (first, second) } else { (second, first) };
        let account = Account::new("Closed", opened, AccountOptions::closed_at(closed)).unwrap();
        let balance = Balance::new(date, Money::gbp(1)).unwrap();
        match account.validate_balance(&balance) {
            Ok(()) => prop_assert!(opened <= date && date <= closed),
            Err(BalanceValidationError::DateOutOfAccountTimeRange { balance_date, account_time_range }) => {
                prop_assert!(date < opened || date > closed);
                prop_assert_eq!(balance_date, date);
                prop_assert_eq!(account_time_range, account.time_range());
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
