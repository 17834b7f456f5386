//! Currency-aware monetary values.
//!
//! `Money` is an immutable pair of a `rust_decimal::Decimal` amount and a
//! [`Currency`]. This crate provides:
//! - construction, sign tests and currency-checked comparison
//! - currency-checked arithmetic returning `MoneyResult`
//! - minor-unit conversion with banker's rounding
//! - the canonical text form `"<CODE> <amount>"` and the serde and sea-orm
//!   (feature `persistence`) encodings built on it
//!
//! ```
//! use moneta::{Money, USD};
//! use rust_decimal::Decimal;
//!
//! let price: Money = "USD 1,055.00".parse().unwrap();
//! let tip = Money::new(Decimal::new(5, 3), USD);
//! assert_eq!(price.add(&tip).unwrap().to_string(), "USD 1055.005");
//! ```

pub mod arithmetic;
pub mod error;
pub mod format;
pub mod minor;
pub mod money;

mod codec;
#[cfg(feature = "persistence")]
mod persistence;

#[cfg(test)]
mod props;

pub use error::{MoneyError, MoneyResult};
pub use format::{decode, decode_with, encode};
pub use minor::MINOR_UNIT_ROUNDING;
pub use money::Money;

pub use moneta_currency::{
    CAD, CNY, Currency, CurrencyCode, CurrencyLookup, EUR, JPY, MXN, Registry, USD, lookup,
};
