// ============================================================================
// Transform Interface
// Defines the contract for pluggable date/time transforms
// ============================================================================

use crate::numeric::{DecimalComponents, ScaleMultiplier, Time64};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

mod sealed {
    pub trait Sealed {}
}

// ============================================================================
// Exposure Flags
// ============================================================================

/// Type-level flag declaring whether a transform offers a call shape.
pub trait Exposure: sealed::Sealed {
    const EXPOSED: bool;
}

/// The transform implements this call shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exposed;

/// The transform does not implement this call shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl sealed::Sealed for Exposed {}
impl sealed::Sealed for Absent {}

impl Exposure for Exposed {
    const EXPOSED: bool = true;
}

impl Exposure for Absent {
    const EXPOSED: bool = false;
}

// ============================================================================
// Calling Conventions
// ============================================================================

/// Calling convention marker, selecting which result flavour is requested.
pub trait Convention: sealed::Sealed {
    const NAME: &'static str;
}

/// Regular result type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standard;

/// Wider result type, for callers whose output range exceeds the standard one
/// (e.g. extended day numbers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extended;

impl sealed::Sealed for Standard {}
impl sealed::Sealed for Extended {}

impl Convention for Standard {
    const NAME: &'static str = "standard";
}

impl Convention for Extended {
    const NAME: &'static str = "extended";
}

// ============================================================================
// Transform
// ============================================================================

/// Strategy pattern interface for date/time transforms.
///
/// A transform names itself and declares which [`Time64`] call shapes it
/// implements. The whole-seconds shape (`Execute<i64, ..>`) is the fallback
/// and needs no flag.
///
/// # Example
/// ```
/// use time64_transform::interfaces::{Absent, Execute, Transform};
///
/// #[derive(Default)]
/// struct ToHour;
///
/// impl Transform for ToHour {
///     const NAME: &'static str = "toHour";
///     type Scaled = Absent;
///     type Components = Absent;
/// }
///
/// impl Execute<i64> for ToHour {
///     type Output = u8;
///     fn execute(&self, seconds: i64, _args: ()) -> u8 {
///         (seconds.rem_euclid(86_400) / 3_600) as u8
///     }
/// }
/// ```
pub trait Transform: Default {
    /// Name used for registration and logging
    const NAME: &'static str;

    /// Whether `Execute<Scaled, ..>` is implemented (highest priority)
    type Scaled: Exposure;

    /// Whether `Execute<DecimalComponents, ..>` is implemented
    type Components: Exposure;
}

/// One call shape of a transform.
///
/// `In` is the value the transform receives:
/// - [`Scaled`]: raw value plus multiplier
/// - [`DecimalComponents`]: truncating split of the raw value
/// - `i64`: whole seconds, floored
/// - any other type: forwarded unchanged by the adapter
///
/// `Args` carries the extra arguments as one value (usually a tuple) and
/// `Conv` selects the [`Standard`] or [`Extended`] calling convention.
pub trait Execute<In, Args = (), Conv = Standard> {
    type Output;

    fn execute(&self, input: In, args: Args) -> Self::Output;
}

/// Input of the raw+multiplier shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scaled {
    pub value: Time64,
    pub multiplier: ScaleMultiplier,
}

impl Scaled {
    #[inline]
    pub const fn new(value: Time64, multiplier: ScaleMultiplier) -> Self {
        Self { value, multiplier }
    }
}

// ============================================================================
// Result Reassembly
// ============================================================================

/// Post-processing of a components-shape result of transform `T`.
///
/// [`DecimalComponents`] is reassembled into a [`Time64`]; every other result
/// type is returned unchanged. All primitives, references, `String`,
/// `Time64`, chrono values, `Option`, `Result`, `Vec` and tuples up to six
/// elements are covered for every transform.
///
/// Other result types are declared with
/// [`impl_pass_through_result!`](crate::impl_pass_through_result): the plain
/// form for types of the calling crate, the `for Transform =>` form for
/// foreign types, which ties the impl to the caller's own transform.
pub trait Reassemble<T> {
    type Value;

    fn reassemble(self, multiplier: ScaleMultiplier) -> Self::Value;
}

impl<T> Reassemble<T> for DecimalComponents {
    type Value = Time64;

    #[inline]
    fn reassemble(self, multiplier: ScaleMultiplier) -> Time64 {
        Time64::from_components(self, multiplier)
    }
}

/// Implement [`Reassemble`] as the identity for the listed result types.
///
/// ```
/// use std::time::Duration;
/// use time64_transform::interfaces::{Absent, Exposed, Transform};
///
/// #[derive(Default)]
/// struct Elapsed;
///
/// impl Transform for Elapsed {
///     const NAME: &'static str = "elapsed";
///     type Scaled = Absent;
///     type Components = Exposed;
/// }
///
/// struct Report;
///
/// // Own type: identity for every transform
/// time64_transform::impl_pass_through_result!(Report);
/// // Foreign type: identity for this transform
/// time64_transform::impl_pass_through_result!(for Elapsed => Duration);
/// ```
#[macro_export]
macro_rules! impl_pass_through_result {
    (for $transform:ty => $($ty:ty),* $(,)?) => {
        $(
            impl $crate::interfaces::Reassemble<$transform> for $ty {
                type Value = $ty;

                #[inline]
                fn reassemble(self, _multiplier: $crate::numeric::ScaleMultiplier) -> $ty {
                    self
                }
            }
        )*
    };
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> $crate::interfaces::Reassemble<T> for $ty {
                type Value = $ty;

                #[inline]
                fn reassemble(self, _multiplier: $crate::numeric::ScaleMultiplier) -> $ty {
                    self
                }
            }
        )*
    };
}

impl_pass_through_result!(
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
    Time64,
    Scaled,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
);

impl<'a, T, X: ?Sized> Reassemble<T> for &'a X {
    type Value = &'a X;

    #[inline]
    fn reassemble(self, _multiplier: ScaleMultiplier) -> Self {
        self
    }
}

impl<T, X> Reassemble<T> for Option<X> {
    type Value = Option<X>;

    #[inline]
    fn reassemble(self, _multiplier: ScaleMultiplier) -> Self {
        self
    }
}

impl<T, X, E> Reassemble<T> for Result<X, E> {
    type Value = Result<X, E>;

    #[inline]
    fn reassemble(self, _multiplier: ScaleMultiplier) -> Self {
        self
    }
}

impl<T, X> Reassemble<T> for Vec<X> {
    type Value = Vec<X>;

    #[inline]
    fn reassemble(self, _multiplier: ScaleMultiplier) -> Self {
        self
    }
}

macro_rules! tuple_pass_through_result {
    ($($name:ident),*) => {
        impl<T, $($name),*> Reassemble<T> for ($($name,)*) {
            type Value = Self;

            #[inline]
            fn reassemble(self, _multiplier: ScaleMultiplier) -> Self {
                self
            }
        }
    };
}

tuple_pass_through_result!();
tuple_pass_through_result!(A);
tuple_pass_through_result!(A, B);
tuple_pass_through_result!(A, B, C);
tuple_pass_through_result!(A, B, C, D);
tuple_pass_through_result!(A, B, C, D, E);
tuple_pass_through_result!(A, B, C, D, E, F);
