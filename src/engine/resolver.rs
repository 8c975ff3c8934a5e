// ============================================================================
// Capability Resolver
// Compile-time selection of the call shape a transform is invoked with
// ============================================================================
//
// Priority, first match wins:
// 1. Scaled      - (Time64, multiplier, args...)
// 2. Components  - (DecimalComponents, args...), result reassembled
// 3. Whole       - (floored whole seconds, args...)
//
// The resolver is implemented on the pair of exposure flags declared by the
// transform. The three impls are disjoint, so exactly one applies and the
// choice costs nothing at runtime.

use crate::interfaces::{Absent, Execute, Exposed, Reassemble, Scaled, Transform};
use crate::numeric::{floor_correct, split, DecimalComponents, ScaleMultiplier, Time64};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// The call shape selected for a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// Raw value and multiplier passed through untouched
    Scaled,
    /// Truncating split, result reassembled when it is components
    Components,
    /// Floored whole seconds only
    Whole,
}

impl fmt::Display for CallShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallShape::Scaled => write!(f, "scaled"),
            CallShape::Components => write!(f, "components"),
            CallShape::Whole => write!(f, "whole"),
        }
    }
}

/// Dispatch of a [`Time64`] to the shape selected by the exposure flags.
///
/// Implemented for `(T::Scaled, T::Components)`.
pub trait Resolve<T, Args, Conv> {
    const SHAPE: CallShape;

    type Output;

    fn dispatch(transform: &T, value: Time64, multiplier: ScaleMultiplier, args: Args)
        -> Self::Output;
}

impl<T, C, Args, Conv> Resolve<T, Args, Conv> for (Exposed, C)
where
    T: Execute<Scaled, Args, Conv>,
{
    const SHAPE: CallShape = CallShape::Scaled;

    type Output = T::Output;

    #[inline]
    fn dispatch(
        transform: &T,
        value: Time64,
        multiplier: ScaleMultiplier,
        args: Args,
    ) -> Self::Output {
        transform.execute(Scaled::new(value, multiplier), args)
    }
}

impl<T, Args, Conv> Resolve<T, Args, Conv> for (Absent, Exposed)
where
    T: Execute<DecimalComponents, Args, Conv>,
    T::Output: Reassemble<T>,
{
    const SHAPE: CallShape = CallShape::Components;

    type Output = <T::Output as Reassemble<T>>::Value;

    #[inline]
    fn dispatch(
        transform: &T,
        value: Time64,
        multiplier: ScaleMultiplier,
        args: Args,
    ) -> Self::Output {
        // No floor correction here: the fraction stays signed
        let components = split(value.raw_value(), multiplier);
        Reassemble::<T>::reassemble(transform.execute(components, args), multiplier)
    }
}

impl<T, Args, Conv> Resolve<T, Args, Conv> for (Absent, Absent)
where
    T: Execute<i64, Args, Conv>,
{
    const SHAPE: CallShape = CallShape::Whole;

    type Output = T::Output;

    #[inline]
    fn dispatch(
        transform: &T,
        value: Time64,
        multiplier: ScaleMultiplier,
        args: Args,
    ) -> Self::Output {
        let raw = value.raw_value();
        let components = split(raw, multiplier);
        let whole = floor_correct(components.whole, components.fractional, raw);
        transform.execute(whole, args)
    }
}

/// Flags pair of a transform, the type [`Resolve`] is implemented on.
pub type ShapeOf<T> = (<T as Transform>::Scaled, <T as Transform>::Components);

// ============================================================================
// Input Routing
// ============================================================================

/// A value the adapter accepts.
///
/// [`Time64`] goes through shape resolution. Every other value is handed to
/// the transform unchanged, so one adapter also serves plain day numbers and
/// second counts. All primitives, references, `String`, chrono values,
/// [`DecimalComponents`], `Option`, `Vec` and tuples up to six elements are
/// covered for every transform.
///
/// Other input types are declared with
/// [`impl_pass_through_input!`](crate::impl_pass_through_input): the plain
/// form for types of the calling crate, the `for Transform =>` form for
/// foreign types, which ties the impl to the caller's own transform.
pub trait Route<T, Args, Conv> {
    type Output;

    fn route(self, transform: &T, multiplier: ScaleMultiplier, args: Args) -> Self::Output;
}

impl<T, Args, Conv> Route<T, Args, Conv> for Time64
where
    T: Transform,
    ShapeOf<T>: Resolve<T, Args, Conv>,
{
    type Output = <ShapeOf<T> as Resolve<T, Args, Conv>>::Output;

    #[inline]
    fn route(self, transform: &T, multiplier: ScaleMultiplier, args: Args) -> Self::Output {
        <ShapeOf<T> as Resolve<T, Args, Conv>>::dispatch(transform, self, multiplier, args)
    }
}

/// Implement [`Route`] as a pass-through for the listed input types.
///
/// ```
/// use std::time::Duration;
/// use time64_transform::interfaces::{Absent, Execute, Transform};
///
/// #[derive(Default)]
/// struct Seconds;
///
/// impl Transform for Seconds {
///     const NAME: &'static str = "seconds";
///     type Scaled = Absent;
///     type Components = Absent;
/// }
///
/// impl Execute<Duration> for Seconds {
///     type Output = u64;
///     fn execute(&self, d: Duration, _args: ()) -> u64 {
///         d.as_secs()
///     }
/// }
///
/// // Foreign type: pass-through for this transform
/// time64_transform::impl_pass_through_input!(for Seconds => Duration);
///
/// let adapter = time64_transform::engine::TransformTime64::<Seconds>::new();
/// assert_eq!(adapter.apply(Duration::from_secs(90), ()), 90);
/// ```
#[macro_export]
macro_rules! impl_pass_through_input {
    (for $transform:ty => $($ty:ty),* $(,)?) => {
        $(
            impl<Args, Conv> $crate::engine::Route<$transform, Args, Conv> for $ty
            where
                $transform: $crate::interfaces::Execute<$ty, Args, Conv>,
            {
                type Output = <$transform as $crate::interfaces::Execute<$ty, Args, Conv>>::Output;

                #[inline]
                fn route(
                    self,
                    transform: &$transform,
                    _multiplier: $crate::numeric::ScaleMultiplier,
                    args: Args,
                ) -> Self::Output {
                    $crate::interfaces::Execute::<$ty, Args, Conv>::execute(transform, self, args)
                }
            }
        )*
    };
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T, Args, Conv> $crate::engine::Route<T, Args, Conv> for $ty
            where
                T: $crate::interfaces::Execute<$ty, Args, Conv>,
            {
                type Output = T::Output;

                #[inline]
                fn route(
                    self,
                    transform: &T,
                    _multiplier: $crate::numeric::ScaleMultiplier,
                    args: Args,
                ) -> Self::Output {
                    transform.execute(self, args)
                }
            }
        )*
    };
}

impl_pass_through_input!(
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    DecimalComponents,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
);

impl<'a, T, Args, Conv, X: ?Sized> Route<T, Args, Conv> for &'a X
where
    T: Execute<&'a X, Args, Conv>,
{
    type Output = T::Output;

    #[inline]
    fn route(self, transform: &T, _multiplier: ScaleMultiplier, args: Args) -> Self::Output {
        transform.execute(self, args)
    }
}

impl<T, Args, Conv, X> Route<T, Args, Conv> for Option<X>
where
    T: Execute<Option<X>, Args, Conv>,
{
    type Output = T::Output;

    #[inline]
    fn route(self, transform: &T, _multiplier: ScaleMultiplier, args: Args) -> Self::Output {
        transform.execute(self, args)
    }
}

impl<T, Args, Conv, X> Route<T, Args, Conv> for Vec<X>
where
    T: Execute<Vec<X>, Args, Conv>,
{
    type Output = T::Output;

    #[inline]
    fn route(self, transform: &T, _multiplier: ScaleMultiplier, args: Args) -> Self::Output {
        transform.execute(self, args)
    }
}

macro_rules! tuple_pass_through_input {
    ($($name:ident),*) => {
        impl<T, Args, Conv, $($name),*> Route<T, Args, Conv> for ($($name,)*)
        where
            T: Execute<($($name,)*), Args, Conv>,
        {
            type Output = T::Output;

            #[inline]
            fn route(self, transform: &T, _multiplier: ScaleMultiplier, args: Args) -> Self::Output {
                transform.execute(self, args)
            }
        }
    };
}

tuple_pass_through_input!();
tuple_pass_through_input!(A);
tuple_pass_through_input!(A, B);
tuple_pass_through_input!(A, B, C);
tuple_pass_through_input!(A, B, C, D);
tuple_pass_through_input!(A, B, C, D, E);
tuple_pass_through_input!(A, B, C, D, E, F);
