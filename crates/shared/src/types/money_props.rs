//! Property-based tests for currency-checked money arithmetic.

use proptest::prelude::*;

use super::*;

/// Strategy to generate one of a few valid currency codes.
fn currency_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("GBP"), Just("EUR"), Just("USD"), Just("JPY")]
}

/// Amounts small enough that two of them never overflow.
fn amount_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding two monies of one currency sums the amounts and keeps the currency.
    #[test]
    fn prop_add_same_currency(
        currency in currency_strategy(),
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        let left = Money::new(a, currency).unwrap();
        let right = Money::new(b, currency).unwrap();
        let sum = left.add(&right).unwrap();
        prop_assert_eq!(sum.amount(), a + b);
        prop_assert_eq!(sum.currency().unwrap().as_str(), currency);
    }

    /// Adding monies of different currencies always fails with a mismatch.
    #[test]
    fn prop_add_mismatch_never_coerces(
        first in currency_strategy(),
        second in currency_strategy(),
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        prop_assume!(first != second);
        let result = Money::new(a, first).unwrap().add(&Money::new(b, second).unwrap());
        let is_mismatch = matches!(result, Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    /// Any operand without a currency fails with `NoCurrency`.
    #[test]
    fn prop_add_uncurrencied_fails(
        currency in currency_strategy(),
        a in amount_strategy(),
        b in amount_strategy(),
    ) {
        let with = Money::new(a, currency).unwrap();
        let without = Money::new(b, "").unwrap();
        prop_assert_eq!(with.add(&without), Err(MoneyError::NoCurrency));
        prop_assert_eq!(without.add(&with), Err(MoneyError::NoCurrency));
    }

    /// Equality is reflexive for currencied money.
    #[test]
    fn prop_equal_reflexive(currency in currency_strategy(), a in amount_strategy()) {
        let money = Money::new(a, currency).unwrap();
        prop_assert_eq!(money.equal(&money.clone()), Ok(true));
    }
}
