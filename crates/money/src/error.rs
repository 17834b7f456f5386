//! Money error types.

use moneta_currency::Currency;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors returned by parsing and by currency-checked operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Input is shorter than a code, a separator and one digit.
    #[error("Input too short to be parsed as money: '{input}'")]
    InputTooShort {
        /// The rejected input.
        input: String,
    },

    /// The code is not in the registry used for parsing.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The rejected code.
        code: String,
    },

    /// The amount does not match the numeric grammar or is not a decimal.
    #[error("Invalid number: '{text}'")]
    MalformedAmount {
        /// The rejected amount text.
        text: String,
    },

    /// Both operands must carry the same currency.
    #[error("Expected currency {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        expected: Currency,
        /// Currency of the right operand.
        actual: Currency,
    },

    /// Divisor amount is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit in a decimal or in the requested integer type.
    #[error("Arithmetic overflow")]
    Overflow,
}
