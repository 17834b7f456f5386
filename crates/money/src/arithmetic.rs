//! Currency-checked arithmetic.
//!
//! Binary operations require both operands to carry the same currency and
//! return [`MoneyError::CurrencyMismatch`] otherwise. Results keep full
//! precision; nothing is rounded to the minor unit here.

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

impl Money {
    /// Adds monies. Errors if the currency is different.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.combine(other, Decimal::checked_add)
    }

    /// Subtracts monies. Errors if the currency is different.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Self) -> MoneyResult<Self> {
        self.combine(other, Decimal::checked_sub)
    }

    /// Multiplies monies. Errors if the currency is different.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &Self) -> MoneyResult<Self> {
        self.combine(other, Decimal::checked_mul)
    }

    /// Divides monies. Errors if the currency is different or the divisor
    /// is zero.
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        if other.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.combine(other, Decimal::checked_div)
    }

    /// Flips the sign of the amount, keeping the currency.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-self.amount(), self.currency())
    }

    /// Returns `|amount|`.
    ///
    /// This is a bare decimal; re-wrap it with [`Money::new`] to get money.
    pub fn abs(&self) -> Decimal {
        self.amount().abs()
    }

    fn combine(
        &self,
        other: &Self,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        op(self.amount(), other.amount())
            .map(|amount| Self::new(amount, self.currency()))
            .ok_or(MoneyError::Overflow)
    }
}
