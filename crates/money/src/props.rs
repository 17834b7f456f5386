//! Property-based tests for money values.
//!
//! - Round trip: formatting then parsing returns the same money
//! - Currency mismatch is always rejected
//! - Sign predicates partition every amount
//! - Negation and absolute value laws

use moneta_currency::{Currency, MXN, Registry, USD};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::error::MoneyError;
use crate::money::Money;

/// Strategy to pick any built-in currency.
fn builtin_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Registry::builtin().currencies())
}

/// Strategy to generate signed amounts with up to `max_scale` decimals.
fn amount(max_scale: u32) -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0..=max_scale)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate amounts across the whole 96-bit mantissa.
fn wide_amount(max_scale: u32) -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0..=max_scale)
        .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale))
}

/// Strategy to generate money in any built-in currency, representable at
/// the currency's minor unit.
fn registry_money() -> impl Strategy<Value = Money> {
    builtin_currency().prop_flat_map(|currency| {
        let exponent = currency.minor_unit_exponent();
        prop_oneof![amount(exponent), wide_amount(exponent)]
            .prop_map(move |amount| Money::new(amount, currency))
    })
}

/// Groups integer digits with `,` every three places.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* registry currency and amount within its minor unit,
    /// parse(format(m)) == m.
    #[test]
    fn prop_format_parse_round_trip(money in registry_money()) {
        let parsed = Money::parse(&money.to_string());
        prop_assert_eq!(parsed, Ok(money));
    }

    /// Formatting always shows at least the minor unit's digits.
    #[test]
    fn prop_format_pads_to_exponent(money in registry_money()) {
        let text = money.to_string();
        let exponent = money.currency().minor_unit_exponent() as usize;
        let fraction_len = text.find('.').map_or(0, |dot| text.len() - dot - 1);
        prop_assert!(fraction_len >= exponent, "{} has too few digits", text);
    }

    /// Mixed-currency operations never produce a number.
    #[test]
    fn prop_currency_mismatch_rejected(left in amount(4), right in amount(4)) {
        let usd = Money::new(left, USD);
        let mxn = Money::new(right, MXN);
        let expected = Err(MoneyError::CurrencyMismatch { expected: USD, actual: MXN });

        prop_assert_eq!(usd.add(&mxn), expected.clone());
        prop_assert_eq!(usd.sub(&mxn), expected.clone());
        prop_assert_eq!(usd.mul(&mxn), expected.clone());
        prop_assert_eq!(usd.div(&mxn), expected);
        prop_assert!(usd.compare(&mxn).is_err());
    }

    /// Exactly one of is_zero, is_positive, is_negative holds.
    #[test]
    fn prop_sign_predicates_partition(value in amount(6)) {
        let money = Money::new(value, USD);
        let truths = [money.is_zero(), money.is_positive(), money.is_negative()]
            .into_iter()
            .filter(|t| *t)
            .count();
        prop_assert_eq!(truths, 1);
    }

    /// negate(negate(m)) == m
    #[test]
    fn prop_double_negation(value in amount(6)) {
        let money = Money::new(value, USD);
        prop_assert_eq!(money.negate().negate(), money);
    }

    /// abs(m) >= 0 and abs(m) == abs(negate(m))
    #[test]
    fn prop_abs_laws(value in amount(6)) {
        let money = Money::new(value, USD);
        prop_assert!(money.abs() >= Decimal::ZERO);
        prop_assert_eq!(money.abs(), money.negate().abs());
    }

    /// Thousands grouping never changes the parsed magnitude.
    #[test]
    fn prop_delimiter_stripping(whole in 0u64..10_000_000_000, cents in 0u32..100) {
        let plain = format!("USD {whole}.{cents:02}");
        let grouped = format!("USD {}.{cents:02}", group_thousands(&whole.to_string()));
        prop_assert_eq!(Money::parse(&grouped), Money::parse(&plain));
    }

    /// Minor units survive a trip through Money.
    #[test]
    fn prop_minor_round_trip(minor in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let money = Money::from_minor(minor, USD);
        prop_assert_eq!(money.amount_minor(), Ok(minor));
    }

    /// add then sub returns the original amount.
    #[test]
    fn prop_add_sub_inverse(left in amount(4), right in amount(4)) {
        let left = Money::new(left, USD);
        let right = Money::new(right, USD);
        let back = left.add(&right).and_then(|sum| sum.sub(&right));
        prop_assert_eq!(back, Ok(left));
    }
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands("1"), "1");
    assert_eq!(group_thousands("1000"), "1,000");
    assert_eq!(group_thousands("1234567"), "1,234,567");
    assert_eq!(group_thousands("123456"), "123,456");
}
