//! Minor-unit conversion.
//!
//! CRITICAL: this is the only place fractional precision is lost.
//! Rounding is always banker's rounding (round half to even):
//! - 0.125 USD -> 12 cents
//! - 0.135 USD -> 14 cents

use moneta_currency::Currency;
use rust_decimal::prelude::*;

use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

/// Rounding rule for every conversion to the minor unit.
pub const MINOR_UNIT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

impl Money {
    /// Creates money from an integer count of minor units (e.g. cents).
    #[must_use]
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor, currency.minor_unit_exponent()), currency)
    }

    /// The amount as an integer count of minor units, rounded half to even.
    ///
    /// Fails with [`MoneyError::Overflow`] if the count does not fit in `i64`.
    pub fn amount_minor(&self) -> MoneyResult<i64> {
        let factor = minor_unit_factor(self.currency().minor_unit_exponent())?;
        self.amount()
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?
            .round_dp_with_strategy(0, MINOR_UNIT_ROUNDING)
            .to_i64()
            .ok_or(MoneyError::Overflow)
    }

    /// Rounds the amount to the currency's minor unit, half to even.
    #[must_use]
    pub fn round_to_minor(&self) -> Self {
        let exponent = self.currency().minor_unit_exponent();
        Self::new(
            self.amount()
                .round_dp_with_strategy(exponent, MINOR_UNIT_ROUNDING),
            self.currency(),
        )
    }
}

/// `10^exponent` as a decimal.
fn minor_unit_factor(exponent: u32) -> MoneyResult<Decimal> {
    let factor = 10_i128.checked_pow(exponent).ok_or(MoneyError::Overflow)?;
    Decimal::try_from_i128_with_scale(factor, 0).map_err(|_| MoneyError::Overflow)
}
