// ============================================================================
// Decimal Components
// Split a raw fixed-point value into whole and fractional parts and back
// ============================================================================

use super::scale::ScaleMultiplier;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A raw value broken down against a multiplier.
///
/// Produced by [`split`], which truncates toward zero: for a negative raw
/// value both fields are `<= 0` and `fractional` lies in `(-multiplier, 0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalComponents {
    /// Whole units (seconds)
    pub whole: i64,
    /// Remainder in raw ticks, same sign as the raw value
    pub fractional: i64,
}

impl DecimalComponents {
    #[inline]
    pub const fn new(whole: i64, fractional: i64) -> Self {
        Self { whole, fractional }
    }
}

/// Split `raw` into whole and fractional parts, truncating toward zero.
///
/// No floor correction is applied; see [`floor_correct`].
#[inline]
pub fn split(raw: i64, multiplier: ScaleMultiplier) -> DecimalComponents {
    let m = multiplier.get();
    let whole = raw.wrapping_div(m);
    let fractional = raw.wrapping_sub(whole.wrapping_mul(m));
    DecimalComponents { whole, fractional }
}

/// Round a truncated whole part toward negative infinity.
///
/// Returns `whole - 1` when `raw` is negative and a fraction was cut off,
/// so that `-0.001` seconds lands in second `-1`.
#[inline]
pub const fn floor_correct(whole: i64, fractional: i64, raw: i64) -> i64 {
    if raw < 0 && fractional != 0 {
        whole.wrapping_sub(1)
    } else {
        whole
    }
}

/// Inverse of [`split`]: `whole * multiplier + fractional`.
///
/// Overflow wraps; the result is then unspecified but never a panic.
#[inline]
pub fn reassemble(whole: i64, fractional: i64, multiplier: ScaleMultiplier) -> i64 {
    whole
        .wrapping_mul(multiplier.get())
        .wrapping_add(fractional)
}

/// Whole part of `raw`, truncated toward zero.
#[inline]
pub fn whole_part(raw: i64, multiplier: ScaleMultiplier) -> i64 {
    split(raw, multiplier).whole
}

/// Fractional part of `raw`, same sign as `raw`.
#[inline]
pub fn fractional_part(raw: i64, multiplier: ScaleMultiplier) -> i64 {
    split(raw, multiplier).fractional
}
