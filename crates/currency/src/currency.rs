//! The `Currency` descriptor.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::code::CurrencyCode;
use crate::error::{CurrencyError, CurrencyResult};

/// Describes one fiat currency.
///
/// Two currencies are equal when their codes are equal. The display metadata
/// (symbol, marks, numeric code) never affects monetary identity.
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    code: CurrencyCode,
    numeric_code: u16,
    symbol: char,
    decimal_mark: char,
    thousands_delimiter: char,
    minor_unit_exponent: u32,
}

impl Currency {
    /// Largest minor unit exponent a `Decimal` scale can hold.
    pub const MAX_EXPONENT: u32 = 28;

    /// Largest ISO 4217 numeric code.
    pub const MAX_NUMERIC_CODE: u16 = 999;

    /// Creates a currency descriptor.
    ///
    /// The code is uppercased; it must be three ASCII letters.
    pub fn new(
        code: &str,
        numeric_code: u16,
        symbol: char,
        decimal_mark: char,
        thousands_delimiter: char,
        minor_unit_exponent: u32,
    ) -> CurrencyResult<Self> {
        let code = CurrencyCode::new(code)?;

        if numeric_code > Self::MAX_NUMERIC_CODE {
            return Err(CurrencyError::InvalidNumericCode {
                code: code.to_string(),
                value: numeric_code.to_string(),
            });
        }

        if minor_unit_exponent > Self::MAX_EXPONENT {
            return Err(CurrencyError::InvalidExponent {
                code: code.to_string(),
                exponent: minor_unit_exponent,
                max: Self::MAX_EXPONENT,
            });
        }

        Ok(Self {
            code,
            numeric_code,
            symbol,
            decimal_mark,
            thousands_delimiter,
            minor_unit_exponent,
        })
    }

    /// Builds a currency from generated table data, which is validated at
    /// generation time.
    pub(crate) const fn from_table(
        code: [u8; 3],
        numeric_code: u16,
        symbol: char,
        decimal_mark: char,
        thousands_delimiter: char,
        minor_unit_exponent: u32,
    ) -> Self {
        Self {
            code: CurrencyCode::from_table(code),
            numeric_code,
            symbol,
            decimal_mark,
            thousands_delimiter,
            minor_unit_exponent,
        }
    }

    /// ISO 4217 alphabetic code.
    pub const fn code(&self) -> CurrencyCode {
        self.code
    }

    /// ISO 4217 numeric code.
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// Display glyph, e.g. `$`.
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Character separating integer and fractional digits in human display.
    pub const fn decimal_mark(&self) -> char {
        self.decimal_mark
    }

    /// Character grouping integer digits in human display.
    pub const fn thousands_delimiter(&self) -> char {
        self.thousands_delimiter
    }

    /// Number of fractional digits in the minor unit (2 for cents).
    pub const fn minor_unit_exponent(&self) -> u32 {
        self.minor_unit_exponent
    }

    /// Compares every field, not just the code.
    pub fn is_identical(&self, other: &Self) -> bool {
        self.code == other.code
            && self.numeric_code == other.numeric_code
            && self.symbol == other.symbol
            && self.decimal_mark == other.decimal_mark
            && self.thousands_delimiter == other.thousands_delimiter
            && self.minor_unit_exponent == other.minor_unit_exponent
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code, f)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(CurrencyVisitor)
    }
}

/// Resolves a serialized code through the built-in registry.
struct CurrencyVisitor;

impl Visitor<'_> for CurrencyVisitor {
    type Value = Currency;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an uppercase ISO 4217 currency code")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        crate::lookup(value).ok_or_else(|| E::custom(format!("unknown currency {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{MXN, USD};

    #[test]
    fn test_new_uppercases_code() {
        let usd = Currency::new("usd", 840, '$', '.', ',', 2).unwrap();
        assert_eq!(usd.code().as_str(), "USD");
        assert_eq!(usd, USD);
        assert!(usd.is_identical(&USD));
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        assert!(matches!(
            Currency::new("US", 840, '$', '.', ',', 2),
            Err(CurrencyError::InvalidCode(_))
        ));
        assert!(matches!(
            Currency::new("USD", 1000, '$', '.', ',', 2),
            Err(CurrencyError::InvalidNumericCode { .. })
        ));
        assert!(matches!(
            Currency::new("USD", 840, '$', '.', ',', 29),
            Err(CurrencyError::InvalidExponent { exponent: 29, .. })
        ));
    }

    #[test]
    fn test_equality_is_by_code() {
        let relabelled = Currency::new("USD", 840, 'U', ',', '.', 3).unwrap();
        assert_eq!(relabelled, USD);
        assert!(!relabelled.is_identical(&USD));
        assert_ne!(USD, MXN);
    }

    #[test]
    fn test_hash_follows_equality() {
        use std::collections::HashSet;

        let relabelled = Currency::new("USD", 840, 'U', ',', '.', 3).unwrap();
        let set: HashSet<Currency> = [USD, relabelled, MXN].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(USD.to_string(), "USD");
        assert_eq!(format!("{MXN}"), "MXN");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(USD.numeric_code(), 840);
        assert_eq!(USD.symbol(), '$');
        assert_eq!(USD.decimal_mark(), '.');
        assert_eq!(USD.thousands_delimiter(), ',');
        assert_eq!(USD.minor_unit_exponent(), 2);
    }
}
