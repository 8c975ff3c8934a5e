// ============================================================================
// Time64
// Fixed-point timestamp: raw ticks since the epoch at a runtime scale
// ============================================================================

use super::components::{floor_correct, reassemble, split, DecimalComponents};
use super::errors::{NumericError, NumericResult};
use super::scale::ScaleMultiplier;
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Timestamp stored as `seconds × 10^scale` in an i64.
///
/// The scale is not part of the value; it travels alongside as a
/// [`ScaleMultiplier`] (typically owned by the column or the adapter that
/// reads it). With scale 3, raw `1_500` is `1.500` seconds after the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Time64(i64);

impl Time64 {
    /// The epoch
    pub const ZERO: Self = Self(0);

    /// Maximum representable value
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw ticks.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Reassemble from components.
    #[inline]
    pub fn from_components(components: DecimalComponents, multiplier: ScaleMultiplier) -> Self {
        Self(reassemble(
            components.whole,
            components.fractional,
            multiplier,
        ))
    }

    /// Reassemble from whole seconds and a fractional tick count.
    ///
    /// # Example
    /// ```
    /// use time64_transform::numeric::{ScaleMultiplier, Time64};
    ///
    /// let t = Time64::from_parts(1, 500, ScaleMultiplier::MILLIS);
    /// assert_eq!(t.raw_value(), 1_500);
    /// ```
    #[inline]
    pub fn from_parts(whole: i64, fractional: i64, multiplier: ScaleMultiplier) -> Self {
        Self(reassemble(whole, fractional, multiplier))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw tick count.
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Truncating split, see [`split`].
    #[inline]
    pub fn split(self, multiplier: ScaleMultiplier) -> DecimalComponents {
        split(self.0, multiplier)
    }

    /// Whole seconds rounded toward negative infinity.
    #[inline]
    pub fn floor_seconds(self, multiplier: ScaleMultiplier) -> i64 {
        let c = split(self.0, multiplier);
        floor_correct(c.whole, c.fractional, self.0)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render as a decimal string with `scale` fractional digits.
    ///
    /// Scales past 18 are rendered as if the multiplier were `i64::MAX`.
    pub fn format_with_scale(self, scale: u32) -> String {
        let c = split(self.0, ScaleMultiplier::from_scale(scale));
        let frac = c.fractional.unsigned_abs();

        if scale == 0 {
            format!("{}", c.whole)
        } else if self.0 < 0 && c.whole == 0 {
            // Handle -0.xxx case
            format!("-0.{:0>width$}", frac, width = scale as usize)
        } else {
            format!("{}.{:0>width$}", c.whole, frac, width = scale as usize)
        }
    }
}

impl From<i64> for Time64 {
    #[inline]
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<Time64> for i64 {
    #[inline]
    fn from(t: Time64) -> Self {
        t.0
    }
}

impl fmt::Display for Time64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Time64 {
    /// Convert to a `Decimal` number of seconds.
    ///
    /// # Errors
    /// Returns `ScaleOutOfRange` if `scale` exceeds what `Decimal` holds.
    pub fn to_decimal(self, scale: u32) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_new(self.0, scale)
            .map_err(|_| NumericError::ScaleOutOfRange(scale))
    }

    /// Convert a `Decimal` number of seconds to raw ticks at `scale`.
    ///
    /// # Errors
    /// - `ScaleOutOfRange` if `scale > 18`
    /// - `PrecisionLoss` if `d` has digits below the target scale
    /// - `Overflow` if the value does not fit in i64 ticks
    pub fn from_decimal(d: rust_decimal::Decimal, scale: u32) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let multiplier = ScaleMultiplier::try_from_scale(scale)?;
        let scaled = d
            .checked_mul(rust_decimal::Decimal::from(multiplier.get()))
            .ok_or(NumericError::Overflow)?;

        if scaled.fract() != rust_decimal::Decimal::ZERO {
            return Err(NumericError::PrecisionLoss);
        }

        scaled.to_i64().map(Self).ok_or(NumericError::Overflow)
    }
}

// ============================================================================
// Conversion to chrono
// ============================================================================

impl Time64 {
    /// Convert to a UTC instant.
    ///
    /// Negative values are floored, so raw `-1` at millisecond scale is
    /// `1969-12-31T23:59:59.999Z`. Returns `None` outside chrono's range.
    pub fn to_datetime(self, multiplier: ScaleMultiplier) -> Option<DateTime<Utc>> {
        let m = multiplier.get();
        let seconds = self.floor_seconds(multiplier);
        let ticks = (self.0 as i128) - (seconds as i128) * (m as i128);
        let nanos = ticks * NANOS_PER_SECOND / (m as i128);
        DateTime::from_timestamp(seconds, u32::try_from(nanos).ok()?)
    }

    /// Convert a UTC instant to raw ticks, truncating below one tick.
    ///
    /// # Errors
    /// Returns `Overflow` if the instant does not fit at this multiplier.
    pub fn from_datetime(dt: DateTime<Utc>, multiplier: ScaleMultiplier) -> NumericResult<Self> {
        let m = multiplier.get() as i128;
        let ticks = (dt.timestamp_subsec_nanos() as i128) * m / NANOS_PER_SECOND;
        let raw = (dt.timestamp() as i128) * m + ticks;
        i64::try_from(raw).map(Self).map_err(|_| NumericError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    const MILLIS: ScaleMultiplier = ScaleMultiplier::MILLIS;

    #[test]
    fn test_from_parts() {
        assert_eq!(Time64::from_parts(1, 500, MILLIS).raw_value(), 1_500);
        assert_eq!(Time64::from_parts(-1, -500, MILLIS).raw_value(), -1_500);
    }

    #[test]
    fn test_components_roundtrip() {
        let t = Time64::from_raw(-123_456);
        let c = t.split(MILLIS);
        assert_eq!(c, DecimalComponents::new(-123, -456));
        assert_eq!(Time64::from_components(c, MILLIS), t);
    }

    #[test]
    fn test_floor_seconds() {
        assert_eq!(Time64::from_raw(-1).floor_seconds(MILLIS), -1);
        assert_eq!(Time64::from_raw(1_999).floor_seconds(MILLIS), 1);
        assert_eq!(Time64::from_raw(-2_000).floor_seconds(MILLIS), -2);
    }

    #[test]
    fn test_format_with_scale() {
        assert_eq!(Time64::from_raw(123_456).format_with_scale(3), "123.456");
        assert_eq!(Time64::from_raw(5).format_with_scale(3), "0.005");
        assert_eq!(Time64::from_raw(-5).format_with_scale(3), "-0.005");
        assert_eq!(Time64::from_raw(-1_500).format_with_scale(3), "-1.500");
        assert_eq!(Time64::from_raw(42).format_with_scale(0), "42");
    }

    #[test]
    fn test_to_decimal() {
        let d = Time64::from_raw(123_456).to_decimal(3).unwrap();
        assert_eq!(d, Decimal::new(123_456, 3));
        assert_eq!(d.to_string(), "123.456");
    }

    #[test]
    fn test_from_decimal() {
        let t = Time64::from_decimal(Decimal::new(12345, 2), 3).unwrap(); // 123.45
        assert_eq!(t.raw_value(), 123_450);

        let neg = Time64::from_decimal(Decimal::new(-1, 3), 6).unwrap(); // -0.001
        assert_eq!(neg.raw_value(), -1_000);
    }

    #[test]
    fn test_from_decimal_errors() {
        assert_eq!(
            Time64::from_decimal(Decimal::new(1, 4), 3), // 0.0001
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(
            Time64::from_decimal(Decimal::ONE, 19),
            Err(NumericError::ScaleOutOfRange(19))
        );
        assert_eq!(
            Time64::from_decimal(Decimal::from(i64::MAX), 3),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_to_datetime() {
        let dt = Time64::from_raw(1_500).to_datetime(MILLIS).unwrap();
        assert_eq!(dt.timestamp(), 1);
        assert_eq!(dt.timestamp_subsec_millis(), 500);

        let before_epoch = Time64::from_raw(-1).to_datetime(MILLIS).unwrap();
        assert_eq!(before_epoch.timestamp(), -1);
        assert_eq!(before_epoch.timestamp_subsec_millis(), 999);
    }

    #[test]
    fn test_from_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t = Time64::from_datetime(dt, MILLIS).unwrap();
        assert_eq!(t.raw_value(), 1_704_067_200_000);
        assert_eq!(t.to_datetime(MILLIS), Some(dt));
    }

    #[test]
    fn test_from_datetime_overflow() {
        let dt = Utc.with_ymd_and_hms(2300, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            Time64::from_datetime(dt, ScaleMultiplier::from_scale(9)),
            Err(NumericError::Overflow)
        );
    }
}
