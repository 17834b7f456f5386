//! ISO 4217 alphabetic currency codes.

use std::fmt;
use std::str::FromStr;

use crate::error::{CurrencyError, CurrencyResult};

/// A three-letter ISO 4217 alphabetic code, always held in uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Number of characters in every code.
    pub const LEN: usize = 3;

    /// Creates a code from three ASCII letters, uppercasing them.
    pub fn new(code: &str) -> CurrencyResult<Self> {
        let bytes = <[u8; Self::LEN]>::try_from(code.as_bytes())
            .map_err(|_| CurrencyError::InvalidCode(code.to_owned()))?;

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(CurrencyError::InvalidCode(code.to_owned()));
        }

        Ok(Self(bytes.map(|b| b.to_ascii_uppercase())))
    }

    /// Matches `code` only if it is already in canonical uppercase form.
    ///
    /// Registry lookups go through here, so `"usd"` never finds `USD`.
    #[must_use]
    pub fn exact(code: &str) -> Option<Self> {
        let bytes = <[u8; Self::LEN]>::try_from(code.as_bytes()).ok()?;
        bytes.iter().all(u8::is_ascii_uppercase).then_some(Self(bytes))
    }

    /// Builds a code from generated table data.
    pub(crate) const fn from_table(bytes: [u8; 3]) -> Self {
        Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ])
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
