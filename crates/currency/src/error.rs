//! Currency error types.

use thiserror::Error;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Errors raised while building currency descriptors or registries.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// Code is not exactly three ASCII letters.
    #[error("Invalid currency code: '{0}'")]
    InvalidCode(String),

    /// Minor unit exponent is larger than a decimal can represent.
    #[error("Invalid minor unit exponent for {code}: {exponent} (maximum is {max})")]
    InvalidExponent {
        /// Currency code.
        code: String,
        /// Rejected exponent.
        exponent: u32,
        /// Largest supported exponent.
        max: u32,
    },

    /// ISO numeric code is not a number between 0 and 999.
    #[error("Invalid numeric code for {code}: '{value}'")]
    InvalidNumericCode {
        /// Currency code.
        code: String,
        /// Rejected value.
        value: String,
    },

    /// A field that must hold one character is empty or too long.
    #[error("Invalid {field} for {code}: '{value}'")]
    InvalidCharacter {
        /// Currency code.
        code: String,
        /// Dataset field name.
        field: &'static str,
        /// Rejected value.
        value: String,
    },

    /// Subunits per unit is not a power of ten.
    #[error("Subunit count {subunit_to_unit} for {code} is not a power of ten")]
    NonDecimalSubunit {
        /// Currency code.
        code: String,
        /// Rejected subunit count.
        subunit_to_unit: u64,
    },

    /// Dataset JSON could not be decoded.
    #[error("Malformed currency dataset: {0}")]
    Dataset(#[from] serde_json::Error),
}
