//! Canonical text form: `"<CODE> <amount>"`, e.g. `"USD -10.005"`.
//!
//! [`encode`] and [`decode`] are the only implementation of the text form.
//! `Display`, `FromStr`, serde and the database adapter all delegate here.
//!
//! Grammar accepted after the code and one separator character:
//!
//! ```text
//! [+-]? (digit | thousands-delimiter)* ('.' digit*)?
//! ```
//!
//! The longest matching prefix is used and anything after it is ignored.
//! The canonical decimal separator is always `.`; the currency's display
//! decimal mark is not consulted.

use std::fmt;
use std::str::FromStr;

use moneta_currency::{CurrencyCode, CurrencyLookup, Registry};
use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

/// Canonical separator between integer and fractional digits.
pub const DECIMAL_SEPARATOR: char = '.';

/// Code plus separator plus at least one character of amount.
const MIN_INPUT_LEN: usize = CurrencyCode::LEN + 1;

/// Formats money as `"<CODE> <amount>"`.
///
/// The amount is padded with zeros to at least the currency's minor unit
/// exponent; extra precision is kept, never truncated.
pub fn encode(money: &Money) -> String {
    let currency = money.currency();
    let exponent = currency.minor_unit_exponent() as usize;

    // Negative zero prints as zero.
    let amount = if money.is_zero() {
        money.amount().abs()
    } else {
        money.amount()
    };

    let mut digits = amount.to_string();
    let fraction_len = digits
        .find(DECIMAL_SEPARATOR)
        .map_or(0, |dot| digits.len() - dot - 1);

    if fraction_len < exponent {
        if !digits.contains(DECIMAL_SEPARATOR) {
            digits.push(DECIMAL_SEPARATOR);
        }
        digits.push_str(&"0".repeat(exponent - fraction_len));
    }

    format!("{} {digits}", currency.code())
}

/// Parses the canonical text form using the built-in registry.
pub fn decode(text: &str) -> MoneyResult<Money> {
    decode_with(text, Registry::builtin())
}

/// Parses the canonical text form, resolving codes through `currencies`.
///
/// The fourth character is skipped without being checked, so `"USD-1.00"`
/// reads as `USD 1.00`.
pub fn decode_with<L>(text: &str, currencies: &L) -> MoneyResult<Money>
where
    L: CurrencyLookup + ?Sized,
{
    if text.chars().count() < MIN_INPUT_LEN {
        return Err(MoneyError::InputTooShort {
            input: text.to_owned(),
        });
    }

    let code_end = char_boundary(text, CurrencyCode::LEN);
    let code = &text[..code_end];
    let currency = currencies
        .lookup(code)
        .ok_or_else(|| MoneyError::UnknownCurrency {
            code: code.to_owned(),
        })?;

    let remainder = &text[char_boundary(text, MIN_INPUT_LEN)..];
    let delimiter = Some(currency.thousands_delimiter()).filter(|d| is_strippable(*d));

    let amount = ScannedAmount::scan(remainder, delimiter)
        .and_then(|scanned| scanned.to_decimal())
        .ok_or_else(|| MoneyError::MalformedAmount {
            text: remainder.to_owned(),
        })?;

    Ok(Money::new(amount, currency))
}

/// Byte offset of the `n`th character, or the end of `text`.
fn char_boundary(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(index, _)| index)
}

/// A delimiter that collides with the grammar itself is left alone.
fn is_strippable(delimiter: char) -> bool {
    !delimiter.is_ascii_digit() && !matches!(delimiter, DECIMAL_SEPARATOR | '+' | '-')
}

/// Longest prefix matching the amount grammar, delimiters removed.
#[derive(Debug, PartialEq, Eq)]
struct ScannedAmount {
    negative: bool,
    integer: String,
    fraction: String,
}

impl ScannedAmount {
    /// Returns `None` if the prefix holds no digits at all.
    fn scan(input: &str, delimiter: Option<char>) -> Option<Self> {
        let mut chars = input.chars().peekable();

        let negative = match chars.peek() {
            Some('-') => {
                chars.next();
                true
            }
            Some('+') => {
                chars.next();
                false
            }
            _ => false,
        };

        let mut integer = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                integer.push(c);
            } else if Some(c) != delimiter {
                break;
            }
            chars.next();
        }

        let mut fraction = String::new();
        if chars.next_if_eq(&DECIMAL_SEPARATOR).is_some() {
            while let Some(c) = chars.next_if(char::is_ascii_digit) {
                fraction.push(c);
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        Some(Self {
            negative,
            integer,
            fraction,
        })
    }

    /// Exact conversion. Trailing fractional zeros are dropped only when the
    /// padded digits would not fit in a `Decimal`.
    fn to_decimal(&self) -> Option<Decimal> {
        Self::exact(self.negative, &self.integer, &self.fraction).or_else(|| {
            let trimmed = self.fraction.trim_end_matches('0');
            (trimmed.len() < self.fraction.len())
                .then(|| Self::exact(self.negative, &self.integer, trimmed))
                .flatten()
        })
    }

    fn exact(negative: bool, integer: &str, fraction: &str) -> Option<Decimal> {
        let sign = if negative { "-" } else { "" };
        let integer = if integer.is_empty() { "0" } else { integer };

        let text = if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}{DECIMAL_SEPARATOR}{fraction}")
        };

        Decimal::from_str_exact(&text).ok()
    }
}

impl Money {
    /// Parses `"<CODE> <amount>"` using the built-in registry.
    pub fn parse(text: &str) -> MoneyResult<Self> {
        decode(text)
    }

    /// Parses `"<CODE> <amount>"` using a caller-supplied registry.
    pub fn parse_with<L>(text: &str, currencies: &L) -> MoneyResult<Self>
    where
        L: CurrencyLookup + ?Sized,
    {
        decode_with(text, currencies)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
