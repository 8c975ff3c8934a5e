// ============================================================================
// Time64 Transform Adapter
// Runs a date/time transform over fixed-point timestamps
// ============================================================================

use super::resolver::{CallShape, Resolve, Route, ShapeOf};
use crate::interfaces::{Extended, Standard, Transform};
use crate::numeric::ScaleMultiplier;

/// Adapter giving a [`Transform`] uniform access to [`Time64`] values.
///
/// Depending on the shapes the transform declares, a `Time64` argument is
/// passed as one of:
/// 1. the raw value and the scale multiplier,
/// 2. its components, with a components result reassembled into `Time64`,
/// 3. its whole seconds rounded toward negative infinity, fraction dropped.
///
/// Any other input type is forwarded to the transform unchanged.
///
/// The adapter holds no mutable state; it is `Send + Sync` whenever the
/// transform is.
///
/// # Example
/// ```
/// use time64_transform::prelude::*;
///
/// let adapter = TransformTime64::<ToSecond>::from_scale(3);
/// // -0.001s is second 59 of the previous minute
/// assert_eq!(adapter.apply(Time64::from_raw(-1), ()), 59);
/// ```
///
/// [`Time64`]: crate::numeric::Time64
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformTime64<T> {
    scale_multiplier: ScaleMultiplier,
    transform: T,
}

impl<T: Transform> TransformTime64<T> {
    /// Name of the wrapped transform
    pub const NAME: &'static str = T::NAME;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Adapter for values without fractional part (multiplier 1).
    pub fn new() -> Self {
        Self::with_multiplier(ScaleMultiplier::ONE)
    }

    /// Adapter for values with `scale` fractional digits.
    pub fn from_scale(scale: u32) -> Self {
        Self::with_multiplier(ScaleMultiplier::from_scale(scale))
    }

    /// Adapter for a precomputed multiplier.
    pub fn from_multiplier(multiplier: i64) -> Self {
        Self::with_multiplier(ScaleMultiplier::from_multiplier(multiplier))
    }

    pub fn with_multiplier(scale_multiplier: ScaleMultiplier) -> Self {
        tracing::trace!(
            transform = T::NAME,
            multiplier = scale_multiplier.get(),
            "time64 adapter created"
        );
        Self {
            scale_multiplier,
            transform: T::default(),
        }
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Run the transform with the standard calling convention.
    ///
    /// `args` holds the extra arguments, `()` when there are none.
    #[inline]
    pub fn apply<V, Args>(&self, value: V, args: Args) -> V::Output
    where
        V: Route<T, Args, Standard>,
    {
        value.route(&self.transform, self.scale_multiplier, args)
    }

    /// Run the transform with the extended-result calling convention.
    ///
    /// Shape resolution and splitting are identical to [`apply`](Self::apply).
    #[inline]
    pub fn apply_extended<V, Args>(&self, value: V, args: Args) -> V::Output
    where
        V: Route<T, Args, Extended>,
    {
        value.route(&self.transform, self.scale_multiplier, args)
    }

    /// The call shape a `Time64` is dispatched with for `Args` and `Conv`.
    pub fn call_shape<Args, Conv>() -> CallShape
    where
        ShapeOf<T>: Resolve<T, Args, Conv>,
    {
        <ShapeOf<T> as Resolve<T, Args, Conv>>::SHAPE
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn scale_multiplier(&self) -> ScaleMultiplier {
        self.scale_multiplier
    }

    /// The wrapped transform.
    #[inline]
    pub fn transform(&self) -> &T {
        &self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{Absent, Execute, Exposed, Scaled};
    use crate::numeric::{DecimalComponents, Time64};

    // ------------------------------------------------------------------------
    // Mock transforms
    // ------------------------------------------------------------------------

    /// Whole-only, echoes what it receives
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    struct Echo;

    impl Transform for Echo {
        const NAME: &'static str = "echo";
        type Scaled = Absent;
        type Components = Absent;
    }

    impl Execute<i64> for Echo {
        type Output = i64;
        fn execute(&self, whole: i64, _args: ()) -> i64 {
            whole
        }
    }

    impl Execute<i64, (), Extended> for Echo {
        type Output = i128;
        fn execute(&self, whole: i64, _args: ()) -> i128 {
            whole as i128
        }
    }

    impl Execute<i64, (i64, i64)> for Echo {
        type Output = i64;
        fn execute(&self, whole: i64, (a, b): (i64, i64)) -> i64 {
            whole * a + b
        }
    }

    impl Execute<u32> for Echo {
        type Output = i64;
        fn execute(&self, seconds: u32, _args: ()) -> i64 {
            seconds as i64 + 1
        }
    }

    /// Exposes raw+multiplier and whole-only shapes with different answers
    #[derive(Default)]
    struct Both;

    impl Transform for Both {
        const NAME: &'static str = "both";
        type Scaled = Exposed;
        type Components = Absent;
    }

    impl Execute<Scaled> for Both {
        type Output = i64;
        fn execute(&self, input: Scaled, _args: ()) -> i64 {
            input.value.raw_value() + input.multiplier.get()
        }
    }

    impl Execute<i64> for Both {
        type Output = i64;
        fn execute(&self, _whole: i64, _args: ()) -> i64 {
            -999
        }
    }

    /// Drops the sub-second part through the components shape
    #[derive(Default)]
    struct ZeroFraction;

    impl Transform for ZeroFraction {
        const NAME: &'static str = "zeroFraction";
        type Scaled = Absent;
        type Components = Exposed;
    }

    impl Execute<DecimalComponents> for ZeroFraction {
        type Output = DecimalComponents;
        fn execute(&self, mut c: DecimalComponents, _args: ()) -> DecimalComponents {
            c.fractional = 0;
            c
        }
    }

    impl Execute<DecimalComponents, (), Extended> for ZeroFraction {
        type Output = (i64, i64);
        fn execute(&self, c: DecimalComponents, _args: ()) -> (i64, i64) {
            (c.whole, c.fractional)
        }
    }

    // ------------------------------------------------------------------------
    // Tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_name_and_accessors() {
        let adapter = TransformTime64::<Echo>::from_scale(3);
        assert_eq!(TransformTime64::<Echo>::NAME, "echo");
        assert_eq!(adapter.scale_multiplier(), ScaleMultiplier::MILLIS);
        assert_eq!(adapter.transform(), &Echo);
    }

    #[test]
    fn test_default_multiplier_is_one() {
        let adapter = TransformTime64::<Echo>::new();
        assert_eq!(adapter.scale_multiplier().get(), 1);
        assert_eq!(adapter.apply(Time64::from_raw(5), ()), 5);
        assert_eq!(TransformTime64::<Echo>::default(), adapter);
    }

    #[test]
    fn test_scale_and_multiplier_constructors_agree() {
        assert_eq!(
            TransformTime64::<Echo>::from_scale(6),
            TransformTime64::<Echo>::from_multiplier(1_000_000)
        );
    }

    #[test]
    fn test_whole_path_floors_negative() {
        let adapter = TransformTime64::<Echo>::from_scale(3);
        assert_eq!(adapter.apply(Time64::from_raw(-1), ()), -1);
        assert_eq!(adapter.apply(Time64::from_raw(-1_000), ()), -1);
        assert_eq!(adapter.apply(Time64::from_raw(-1_001), ()), -2);
        assert_eq!(adapter.apply(Time64::from_raw(1_999), ()), 1);
    }

    #[test]
    fn test_whole_path_extended() {
        let adapter = TransformTime64::<Echo>::from_scale(3);
        let out: i128 = adapter.apply_extended(Time64::from_raw(-1), ());
        // Floored like the standard convention, not truncated to 0
        assert_eq!(out, -1);
    }

    #[test]
    fn test_extra_args_forwarded() {
        let adapter = TransformTime64::<Echo>::from_scale(3);
        assert_eq!(adapter.apply(Time64::from_raw(2_500), (10i64, 3i64)), 23);
    }

    #[test]
    fn test_scaled_shape_wins() {
        let adapter = TransformTime64::<Both>::from_scale(3);
        assert_eq!(adapter.apply(Time64::from_raw(1_500), ()), 2_500);
        assert_eq!(
            TransformTime64::<Both>::call_shape::<(), Standard>(),
            CallShape::Scaled
        );
    }

    #[test]
    fn test_components_result_reassembled() {
        let adapter = TransformTime64::<ZeroFraction>::from_scale(3);
        let out: Time64 = adapter.apply(Time64::from_raw(1_500), ());
        assert_eq!(out, Time64::from_raw(1_000));
    }

    #[test]
    fn test_components_path_truncates() {
        let adapter = TransformTime64::<ZeroFraction>::from_scale(3);
        // Truncation toward zero, unlike the whole path
        assert_eq!(adapter.apply(Time64::from_raw(-1_500), ()), Time64::from_raw(-1_000));
        assert_eq!(adapter.apply_extended(Time64::from_raw(-1_500), ()), (-1, -500));
    }

    #[test]
    fn test_non_components_result_unchanged() {
        let adapter = TransformTime64::<ZeroFraction>::from_scale(3);
        assert_eq!(adapter.apply_extended(Time64::from_raw(1_500), ()), (1, 500));
        assert_eq!(
            TransformTime64::<ZeroFraction>::call_shape::<(), Extended>(),
            CallShape::Components
        );
    }

    #[test]
    fn test_pass_through() {
        let adapter = TransformTime64::<Echo>::from_scale(3);
        assert_eq!(adapter.apply(1_500u32, ()), Echo.execute(1_500u32, ()));
        assert_eq!(adapter.apply(-1i64, ()), -1);
    }

    #[test]
    fn test_adapter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransformTime64<Echo>>();
    }
}
