//! Property-based tests for balance aggregates.

use chrono::{DateTime, Utc};
use coffer_shared::Money;
use proptest::prelude::*;

use super::collection::Balances;
use super::types::Balance;

/// Dates drawn from a small pool so ties are common.
fn balances_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..8, 1..20)
}

/// Builds balances whose amount records their position.
fn build(days: &[i64]) -> Balances {
    days.iter()
        .enumerate()
        .map(|(index, day)| {
            let date = DateTime::<Utc>::from_timestamp(946_684_800 + day * 86_400, 0).unwrap();
            Balance::new(date, Money::gbp(i64::try_from(index).unwrap())).unwrap()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Earliest is the first balance carrying the minimum date.
    #[test]
    fn prop_earliest_first_minimum(days in balances_strategy()) {
        let balances = build(&days);
        let min_day = days.iter().copied().min().unwrap();
        let expected = days.iter().position(|day| *day == min_day).unwrap();
        let earliest = balances.earliest().unwrap();
        prop_assert_eq!(earliest.money().amount(), i64::try_from(expected).unwrap());
    }

    /// Latest is the last balance carrying the maximum date.
    #[test]
    fn prop_latest_last_maximum(days in balances_strategy()) {
        let balances = build(&days);
        let max_day = days.iter().copied().max().unwrap();
        let expected = days.iter().rposition(|day| *day == max_day).unwrap();
        let latest = balances.latest().unwrap();
        prop_assert_eq!(latest.money().amount(), i64::try_from(expected).unwrap());
    }

    /// The sum of single-currency balances is the arithmetic sum.
    #[test]
    fn prop_sum_single_currency(amounts in prop::collection::vec(-1_000_000i64..1_000_000, 0..20)) {
        let date = DateTime::<Utc>::from_timestamp(946_684_800, 0).unwrap();
        let balances: Balances = amounts
            .iter()
            .map(|amount| Balance::new(date, Money::gbp(*amount)).unwrap())
            .collect();
        let sum = balances.sum().unwrap();
        prop_assert_eq!(sum.amount(), amounts.iter().sum::<i64>());
    }
}
