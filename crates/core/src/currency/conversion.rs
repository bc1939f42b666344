//! Rate calculation.
//!
//! Rounding strategy: the converted value is rounded UP (toward positive
//! infinity) at the configured decimal places, i.e.
//! `ceil(amount * rate * 10^places) / 10^places`. This is not
//! nearest-rounding: 100.122 at 2 places becomes 100.13.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// `amount * rate` does not fit in a decimal.
    #[error("converting {amount} at rate {rate} overflows")]
    Overflow {
        /// Amount being converted.
        amount: Decimal,
        /// Upstream rate.
        rate: Decimal,
    },
}

/// Converts an amount using the given rate, rounding up at `decimal_places`.
pub fn convert_amount(
    amount: Decimal,
    rate: Decimal,
    decimal_places: u32,
) -> Result<Decimal, ConversionError> {
    let converted = amount
        .checked_mul(rate)
        .ok_or(ConversionError::Overflow { amount, rate })?;
    Ok(converted.round_dp_with_strategy(decimal_places, RoundingStrategy::ToPositiveInfinity))
}
