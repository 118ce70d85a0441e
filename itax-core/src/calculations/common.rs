//! Common numeric helpers shared by the tax calculations.
//!
//! The engine itself never rounds; rounding helpers here exist for callers
//! that present results (whole rupees on a report, paise in an export).

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a rupee amount to whole rupees, half away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::common::round_rupees;
///
/// assert_eq!(round_rupees(dec!(13000.208)), dec!(13000));
/// assert_eq!(round_rupees(dec!(2.5)), dec!(3));
/// ```
pub fn round_rupees(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps an amount at zero from below.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Converts a floating point income into a rupee amount for the engine.
///
/// Negative, NaN and infinite inputs all become zero, and so does any value
/// too large to be represented as a [`Decimal`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::common::income_from_f64;
///
/// assert_eq!(income_from_f64(1250000.0), dec!(1250000));
/// assert_eq!(income_from_f64(-5.0), dec!(0));
/// assert_eq!(income_from_f64(f64::NAN), dec!(0));
/// ```
pub fn income_from_f64(value: f64) -> Decimal {
    if !value.is_finite() || value <= 0.0 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).map_or(Decimal::ZERO, clamp_non_negative)
}
