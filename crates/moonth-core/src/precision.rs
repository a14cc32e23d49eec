//! Fixed-precision rounding for reported values.
//!
//! Rounding goes through [`Decimal`] so that the result is the nearest
//! decimal at the requested precision (ties to even) rather than whatever a
//! scale-multiply-truncate on binary floats happens to produce.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Round `value` to `dp` decimal digits.
///
/// Values that cannot be represented as a [`Decimal`] (NaN, infinities,
/// magnitudes beyond 7.9e28) are returned unchanged.
pub fn round_to(value: f64, dp: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(dp))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_digits() {
        assert!((round_to(59.794_290_5, 4) - 59.7943).abs() < 1e-12);
        assert!((round_to(29.0, 2) - 29.0).abs() < f64::EPSILON);
        assert!((round_to(-0.003_428_5, 4) - -0.0034).abs() < 1e-12);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }
}
