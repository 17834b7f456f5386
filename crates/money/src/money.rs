//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use moneta_currency::Currency;
use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};

/// An immutable amount of a specific currency.
///
/// The amount is held in the currency's major unit (dollars, not cents) at
/// full precision. Every operation returns a new value; the currency only
/// changes through [`Money::with_currency`].
///
/// Equality is numeric: `USD 1.0 == USD 1.00`. Money in different
/// currencies is never equal and has no ordering.
#[derive(Debug, Clone, Copy)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance.
    ///
    /// The currency does not need to be registered; only parsing and
    /// formatting round-trips go through a registry.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Creates money from a plain decimal string such as `"-10.005"`.
    pub fn from_amount_str(amount: &str, currency: Currency) -> MoneyResult<Self> {
        Decimal::from_str_exact(amount)
            .map(|amount| Self::new(amount, currency))
            .map_err(|_| MoneyError::MalformedAmount {
                text: amount.to_owned(),
            })
    }

    /// The amount in the currency's major unit.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The unit of account.
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Re-labels the amount with another currency.
    ///
    /// This does NOT perform an exchange: `USD 10` becomes `MXN 10`.
    #[must_use]
    pub const fn with_currency(&self, currency: Currency) -> Self {
        Self::new(self.amount, currency)
    }

    /// Returns true if this money is denominated in `currency`.
    pub fn is_currency(&self, currency: &Currency) -> bool {
        self.currency == *currency
    }

    /// Returns true if both values are denominated in the same currency.
    pub fn same_currency(&self, other: &Self) -> bool {
        self.is_currency(&other.currency)
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            })
        }
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is less than zero.
    ///
    /// A negative zero is zero, not negative.
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Three-way numeric comparison of two amounts in the same currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.same_currency(other) && self.amount == other.amount
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.amount.normalize().hash(state);
    }
}

/// `None` when the currencies differ.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}
