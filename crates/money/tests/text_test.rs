//! Textual encoding: `Display` and `FromStr` agree with the canonical codec.

use moneta::{CAD, CNY, MXN, Money, MoneyError, USD, decode, encode};
use rust_decimal_macros::dec;

#[test]
fn display_matches_encode() {
    for money in [
        Money::new(dec!(-1), USD),
        Money::new(dec!(0.1), MXN),
        Money::new(dec!(1234567.891), CNY),
        Money::zero(CAD),
    ] {
        assert_eq!(money.to_string(), encode(&money));
        assert_eq!(money.to_string().parse::<Money>(), decode(&encode(&money)));
    }
}

#[test]
fn parse_errors_surface_to_caller() {
    assert!(matches!(
        "US".parse::<Money>(),
        Err(MoneyError::InputTooShort { .. })
    ));
    assert_eq!(
        "XXX 55.00".parse::<Money>(),
        Err(MoneyError::UnknownCurrency {
            code: "XXX".to_string()
        })
    );
    assert!(matches!(
        "CAD xyz".parse::<Money>(),
        Err(MoneyError::MalformedAmount { .. })
    ));
}

#[test]
fn zero_formats_with_minor_digits() {
    assert_eq!(Money::zero(USD).to_string(), "USD 0.00");
    assert_eq!(Money::zero(USD).negate().to_string(), "USD 0.00");
}
