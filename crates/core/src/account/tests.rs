//! Unit tests for accounts.

use chrono::{Duration, TimeZone, Utc};
use coffer_shared::types::{Timestamp, zero_timestamp};
use coffer_shared::{Money, MoneyError};
use rstest::rstest;

use super::*;
use crate::balance::{Balance, BalanceError};
use crate::time_range::{TimeRange, TimeRangeError};

fn at(year: i32) -> Timestamp {
    Utc.with_ymd_and_hms(year, 1, 1, 1, 1, 1).unwrap()
}

fn balance_at(date: Timestamp) -> Balance {
    Balance::new(date, Money::gbp(100)).unwrap()
}

fn open_account() -> Account {
    Account::new("Current", at(2000), AccountOptions::default()).unwrap()
}

fn closed_account() -> Account {
    Account::new("Savings", at(2000), AccountOptions::closed_at(at(2002))).unwrap()
}

#[test]
fn test_new_open_account() {
    let account = open_account();
    assert_eq!(account.name(), "Current");
    assert_eq!(account.start(), Some(at(2000)));
    assert_eq!(account.end(), None);
    assert!(account.is_open());
}

#[test]
fn test_new_closed_account() {
    let account = closed_account();
    assert_eq!(account.end(), Some(at(2002)));
    assert!(!account.is_open());
}

#[test]
fn test_new_zero_close_time_is_ignored() {
    let account =
        Account::new("Current", at(2000), AccountOptions::closed_at(zero_timestamp())).unwrap();
    assert!(account.is_open());
    assert_eq!(account.end(), None);
}

#[test]
fn test_new_empty_name() {
    let rejected = Account::new("", at(2000), AccountOptions::default()).unwrap_err();
    assert_eq!(rejected.error().faults(), &[AccountFault::EmptyName]);
}

#[test]
fn test_new_zero_start() {
    let rejected = Account::new("X", zero_timestamp(), AccountOptions::default()).unwrap_err();
    assert_eq!(rejected.error().faults(), &[AccountFault::ZeroDateOpened]);
    assert_eq!(rejected.value().start(), Some(zero_timestamp()));
}

#[test]
fn test_new_empty_name_and_zero_start_in_order() {
    let rejected = Account::new("  ", zero_timestamp(), AccountOptions::default()).unwrap_err();
    assert_eq!(
        rejected.error().faults(),
        &[AccountFault::EmptyName, AccountFault::ZeroDateOpened]
    );
}

#[test]
fn test_new_returns_attempted_account_on_failure() {
    let rejected =
        Account::new("Loan", at(2001), AccountOptions::closed_at(at(2000))).unwrap_err();
    let (account, error) = rejected.into_parts();
    assert_eq!(account.name(), "Loan");
    assert_eq!(account.start(), Some(at(2001)));
    assert_eq!(account.end(), Some(at(2000)));
    assert_eq!(
        error.faults(),
        &[AccountFault::TimeRange(TimeRangeError::EndBeforeStart)]
    );
}

#[rstest]
#[case(
    "",
    TimeRange::unbounded(),
    vec![AccountFault::EmptyName, AccountFault::ZeroDateOpened]
)]
#[case("TEST_ACCOUNT", TimeRange::unbounded(), vec![AccountFault::ZeroDateOpened])]
#[case("", TimeRange::new(Some(at(2000)), None), vec![AccountFault::EmptyName])]
#[case(
    "TEST_ACCOUNT",
    TimeRange::new(None, Some(zero_timestamp())),
    vec![AccountFault::ZeroDateOpened, AccountFault::ZeroValidDateClosed]
)]
#[case(
    "TEST_ACCOUNT",
    TimeRange::new(Some(at(2000)), Some(at(1999))),
    vec![AccountFault::TimeRange(TimeRangeError::EndBeforeStart)]
)]
#[case(
    "",
    TimeRange::new(Some(zero_timestamp()), Some(zero_timestamp())),
    vec![
        AccountFault::EmptyName,
        AccountFault::ZeroDateOpened,
        AccountFault::ZeroValidDateClosed,
    ]
)]
#[case(
    " ",
    TimeRange::new(Some(at(2000)), Some(zero_timestamp())),
    vec![
        AccountFault::EmptyName,
        AccountFault::TimeRange(TimeRangeError::EndBeforeStart),
        AccountFault::ZeroValidDateClosed,
    ]
)]
#[case("TEST_ACCOUNT", TimeRange::new(Some(at(2000)), Some(at(2001))), vec![])]
#[case("TEST_ACCOUNT", TimeRange::new(Some(at(2000)), None), vec![])]
fn test_validate(
    #[case] name: &str,
    #[case] time_range: TimeRange,
    #[case] expected: Vec<AccountFault>,
) {
    let account = Account::from_parts(name.to_string(), time_range);
    let result = account.validate();
    if expected.is_empty() {
        assert_eq!(result, Ok(()));
    } else {
        assert_eq!(result, Err(FieldError::new(expected)));
    }
}

#[test]
fn test_field_error_display_and_messages() {
    let error = FieldError::new(vec![AccountFault::EmptyName, AccountFault::ZeroDateOpened]);
    assert_eq!(
        error.to_string(),
        "AccountFieldError: empty name. no opened date given."
    );
    assert_eq!(
        error.messages(),
        vec!["empty name".to_string(), "no opened date given".to_string()]
    );
    assert!(error.contains(AccountFault::EmptyName));
    assert!(!error.contains(AccountFault::ZeroValidDateClosed));
    assert_eq!(error.len(), 2);
}

#[rstest]
#[case(TimeRange::unbounded(), true)]
#[case(TimeRange::new(Some(at(2000)), None), true)]
#[case(TimeRange::new(None, Some(at(2000))), false)]
#[case(TimeRange::new(Some(at(2000)), Some(zero_timestamp())), false)]
fn test_is_open(#[case] time_range: TimeRange, #[case] expected: bool) {
    let account = Account::from_parts("TEST_ACCOUNT".to_string(), time_range);
    assert_eq!(account.is_open(), expected);
}

#[test]
fn test_validate_balance_invalid_account_returns_account_error() {
    let account = Account::from_parts(String::new(), TimeRange::new(Some(at(2001)), Some(at(2000))));
    let account_error = account.validate().unwrap_err();
    let balance = Balance::new(at(2000), Money::gbp(1)).unwrap();
    assert_eq!(
        account.validate_balance(&balance),
        Err(BalanceValidationError::Account(account_error.clone()))
    );
    assert_eq!(
        account.validate_balance(&balance).unwrap_err().to_string(),
        account_error.to_string()
    );
}

#[test]
fn test_validate_balance_invalid_balance_returns_balance_error() {
    let (zero_dated, _) = Balance::new(zero_timestamp(), Money::gbp(1))
        .unwrap_err()
        .into_parts();
    assert_eq!(
        open_account().validate_balance(&zero_dated),
        Err(BalanceValidationError::Balance(BalanceError::ZeroDate))
    );
}

#[rstest]
#[case(open_account(), at(1999), false)]
#[case(open_account(), at(2000), true)]
#[case(open_account(), at(2001), true)]
#[case(open_account(), at(3000), true)]
#[case(closed_account(), at(1999), false)]
#[case(closed_account(), at(2000), true)]
#[case(closed_account(), at(2001), true)]
#[case(closed_account(), at(2002) - Duration::nanoseconds(1), true)]
#[case(closed_account(), at(2002), true)]
#[case(closed_account(), at(2002) + Duration::nanoseconds(1), false)]
#[case(closed_account(), at(2003), false)]
fn test_validate_balance_dates(
    #[case] account: Account,
    #[case] date: Timestamp,
    #[case] accepted: bool,
) {
    let result = account.validate_balance(&balance_at(date));
    if accepted {
        assert_eq!(result, Ok(()));
    } else {
        assert_eq!(
            result,
            Err(BalanceValidationError::DateOutOfAccountTimeRange {
                balance_date: date,
                account_time_range: account.time_range(),
            })
        );
    }
}

#[test]
fn test_closing_balance_exception_only_applies_to_exact_end() {
    let account = closed_account();
    assert!(!account.time_range().contains(at(2002)));
    assert_eq!(account.validate_balance(&balance_at(at(2002))), Ok(()));
}

#[test]
fn test_date_out_of_range_error_code() {
    let err = closed_account()
        .validate_balance(&balance_at(at(2003)))
        .unwrap_err();
    assert_eq!(err.error_code(), "BALANCE_DATE_OUT_OF_RANGE");
    assert!(err.to_string().starts_with("balance date 2003-01-01 01:01:01 UTC"));
}

#[test]
fn test_balance_validation_error_wraps_money_error_code() {
    let err = BalanceValidationError::Balance(BalanceError::Money(MoneyError::NoCurrency));
    assert_eq!(err.error_code(), "NO_CURRENCY");
    assert_eq!(err.to_string(), "currency is not set");
}

#[test]
fn test_account_equality() {
    assert_eq!(closed_account(), closed_account());
    assert_ne!(open_account(), closed_account());

    let renamed = Account::new("Other", at(2000), AccountOptions::default()).unwrap();
    assert_ne!(open_account(), renamed);
}

#[test]
fn test_account_serde_round_trip() {
    for account in [open_account(), closed_account()] {
        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }
}

#[test]
fn test_account_serialize_shape() {
    let json = serde_json::to_value(open_account()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Current",
            "start": "2000-01-01T01:01:01Z",
            "end": null
        })
    );
}

#[test]
fn test_account_deserialize_revalidates() {
    let err = serde_json::from_str::<Account>(r#"{"name": "", "start": null, "end": null}"#)
        .unwrap_err();
    assert!(err.to_string().contains("empty name"));

    let record = AccountRecord {
        name: "X".to_string(),
        start: Some(at(2001)),
        end: Some(at(2000)),
    };
    assert_eq!(
        Account::try_from(record),
        Err(FieldError::new(vec![AccountFault::TimeRange(
            TimeRangeError::EndBeforeStart
        )]))
    );
}

#[test]
fn test_account_display() {
    let account = Account::new(
        "Current",
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        AccountOptions::default(),
    )
    .unwrap();
    assert_eq!(account.to_string(), "Current [2000-01-01T00:00:00+00:00, open)");
}

#[test]
fn test_accounts_open() {
    let accounts: Accounts = vec![open_account(), closed_account()].into();
    let open: Vec<_> = accounts.open().map(Account::name).collect();
    assert_eq!(open, vec!["Current"]);
    assert_eq!(accounts.len(), 2);
}
