// ============================================================================
// Rounding Transforms
// Truncate a timestamp to a boundary, keeping its precision
// ============================================================================

use crate::interfaces::{Absent, Execute, Exposed, Scaled, Transform};
use crate::numeric::{DecimalComponents, NumericError, NumericResult, Time64};

// ============================================================================
// toStartOfSecond
// ============================================================================

/// Start of the second containing the timestamp.
///
/// Components transform: it zeroes the fraction and the adapter reassembles
/// the result at the input's scale. The split it receives truncates toward
/// zero, so negative values are floored here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToStartOfSecond;

impl Transform for ToStartOfSecond {
    const NAME: &'static str = "toStartOfSecond";
    type Scaled = Absent;
    type Components = Exposed;
}

impl Execute<DecimalComponents> for ToStartOfSecond {
    type Output = DecimalComponents;

    #[inline]
    fn execute(&self, c: DecimalComponents, _args: ()) -> DecimalComponents {
        let whole = if c.fractional < 0 { c.whole - 1 } else { c.whole };
        DecimalComponents::new(whole, 0)
    }
}

// ============================================================================
// toStartOfInterval
// ============================================================================

/// Start of the interval containing the timestamp.
///
/// Needs the raw value, so it takes the scaled shape. The interval is given
/// in ticks of the input scale (`(i64,)`) or in seconds (`(f64,)`); a float
/// interval is converted with `as`, so NaN and out-of-range values give
/// whatever that conversion yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToStartOfInterval;

impl ToStartOfInterval {
    fn floor_to(raw: i64, interval: i64) -> NumericResult<Time64> {
        if interval <= 0 {
            return Err(NumericError::InvalidInterval(interval));
        }
        let start = raw.div_euclid(interval).wrapping_mul(interval);
        Ok(Time64::from_raw(start))
    }
}

impl Transform for ToStartOfInterval {
    const NAME: &'static str = "toStartOfInterval";
    type Scaled = Exposed;
    type Components = Absent;
}

impl Execute<Scaled, (i64,)> for ToStartOfInterval {
    type Output = NumericResult<Time64>;

    #[inline]
    fn execute(&self, input: Scaled, (ticks,): (i64,)) -> Self::Output {
        Self::floor_to(input.value.raw_value(), ticks)
    }
}

impl Execute<Scaled, (f64,)> for ToStartOfInterval {
    type Output = NumericResult<Time64>;

    #[inline]
    fn execute(&self, input: Scaled, (seconds,): (f64,)) -> Self::Output {
        let ticks = (seconds * input.multiplier.get() as f64) as i64;
        Self::floor_to(input.value.raw_value(), ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TransformTime64;

    #[test]
    fn test_start_of_second() {
        let adapter = TransformTime64::<ToStartOfSecond>::from_scale(3);
        assert_eq!(adapter.apply(Time64::from_raw(1_500), ()), Time64::from_raw(1_000));
        assert_eq!(adapter.apply(Time64::from_raw(2_000), ()), Time64::from_raw(2_000));
    }

    #[test]
    fn test_start_of_second_before_epoch() {
        let adapter = TransformTime64::<ToStartOfSecond>::from_scale(3);
        assert_eq!(adapter.apply(Time64::from_raw(-1), ()), Time64::from_raw(-1_000));
        assert_eq!(adapter.apply(Time64::from_raw(-1_500), ()), Time64::from_raw(-2_000));
        assert_eq!(adapter.apply(Time64::from_raw(-2_000), ()), Time64::from_raw(-2_000));
    }

    #[test]
    fn test_start_of_interval_ticks() {
        let adapter = TransformTime64::<ToStartOfInterval>::from_scale(3);
        let t = Time64::from_raw(12_345);
        assert_eq!(adapter.apply(t, (5_000i64,)), Ok(Time64::from_raw(10_000)));
        assert_eq!(
            adapter.apply(Time64::from_raw(-1), (5_000i64,)),
            Ok(Time64::from_raw(-5_000))
        );
    }

    #[test]
    fn test_start_of_interval_seconds() {
        let adapter = TransformTime64::<ToStartOfInterval>::from_scale(6);
        let t = Time64::from_raw(12_345_678);
        assert_eq!(adapter.apply(t, (0.5f64,)), Ok(Time64::from_raw(12_000_000)));
    }

    #[test]
    fn test_start_of_interval_error_propagates() {
        let adapter = TransformTime64::<ToStartOfInterval>::from_scale(3);
        assert_eq!(
            adapter.apply(Time64::from_raw(1), (0i64,)),
            Err(NumericError::InvalidInterval(0))
        );
        assert_eq!(
            adapter.apply(Time64::from_raw(1), (-5_000i64,)),
            Err(NumericError::InvalidInterval(-5_000))
        );
        // NaN converts to zero ticks
        assert_eq!(
            adapter.apply(Time64::from_raw(1), (f64::NAN,)),
            Err(NumericError::InvalidInterval(0))
        );
        assert_eq!(
            adapter.apply(Time64::from_raw(1), (-1.5f64,)),
            Err(NumericError::InvalidInterval(-1_500))
        );
    }
}
