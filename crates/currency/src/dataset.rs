//! Currency dataset schema.
//!
//! The built-in table is generated from a JSON object keyed by lowercase
//! code, in the shape published by the RubyMoney currency list:
//!
//! ```json
//! { "usd": { "iso_code": "USD", "iso_numeric": "840", "name": "United States Dollar",
//!            "symbol": "$", "decimal_mark": ".", "thousands_separator": ",",
//!            "subunit_to_unit": 100 } }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use crate::currency::Currency;
use crate::error::{CurrencyError, CurrencyResult};

/// One currency entry in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyRecord {
    /// ISO 4217 alphabetic code.
    pub iso_code: String,
    /// ISO 4217 numeric code, zero padded.
    pub iso_numeric: String,
    /// English name.
    pub name: String,
    /// Display symbol; only its first character is kept.
    pub symbol: String,
    /// Display decimal mark.
    pub decimal_mark: String,
    /// Display thousands separator.
    pub thousands_separator: String,
    /// Minor units per major unit (100 for cents).
    pub subunit_to_unit: u64,
}

impl CurrencyRecord {
    /// Validates the record and converts it to a `Currency`.
    pub fn to_currency(&self) -> CurrencyResult<Currency> {
        let numeric_code =
            self.iso_numeric
                .parse::<u16>()
                .map_err(|_| CurrencyError::InvalidNumericCode {
                    code: self.iso_code.clone(),
                    value: self.iso_numeric.clone(),
                })?;

        let symbol = self
            .symbol
            .chars()
            .next()
            .ok_or_else(|| self.invalid_character("symbol", &self.symbol))?;
        if self.symbol.chars().count() > 1 {
            warn!(
                code = %self.iso_code,
                symbol = %self.symbol,
                "Multi-character symbol truncated to its first character"
            );
        }

        let decimal_mark = self.single_char("decimal_mark", &self.decimal_mark)?;
        let thousands_delimiter =
            self.single_char("thousands_separator", &self.thousands_separator)?;

        let exponent = subunit_exponent(self.subunit_to_unit).ok_or_else(|| {
            CurrencyError::NonDecimalSubunit {
                code: self.iso_code.clone(),
                subunit_to_unit: self.subunit_to_unit,
            }
        })?;

        Currency::new(
            &self.iso_code,
            numeric_code,
            symbol,
            decimal_mark,
            thousands_delimiter,
            exponent,
        )
    }

    fn single_char(&self, field: &'static str, value: &str) -> CurrencyResult<char> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(self.invalid_character(field, value)),
        }
    }

    fn invalid_character(&self, field: &'static str, value: &str) -> CurrencyError {
        CurrencyError::InvalidCharacter {
            code: self.iso_code.clone(),
            field,
            value: value.to_owned(),
        }
    }
}

/// Parses dataset JSON into records sorted by code.
pub fn parse_dataset(json: &str) -> CurrencyResult<Vec<CurrencyRecord>> {
    let records: BTreeMap<String, CurrencyRecord> = serde_json::from_str(json)?;
    let mut records: Vec<CurrencyRecord> = records.into_values().collect();
    records.sort_by_cached_key(|record| record.iso_code.to_ascii_uppercase());
    Ok(records)
}

/// Converts a power-of-ten subunit count to its base-10 exponent.
fn subunit_exponent(subunit_to_unit: u64) -> Option<u32> {
    if subunit_to_unit == 0 {
        return None;
    }

    let mut remaining = subunit_to_unit;
    let mut exponent = 0;
    while remaining % 10 == 0 {
        remaining /= 10;
        exponent += 1;
    }

    (remaining == 1).then_some(exponent)
}
