// ============================================================================
// Scale Multiplier
// Power-of-ten factor between raw ticks and whole seconds
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

/// Largest scale with an exact i64 power of ten.
pub const MAX_SCALE: u32 = 18;

/// Compute 10^n at compile time
const fn pow10(n: u32) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

const fn build_table() -> [i64; MAX_SCALE as usize + 1] {
    let mut table = [0i64; MAX_SCALE as usize + 1];
    let mut i = 0;
    while i <= MAX_SCALE as usize {
        table[i] = pow10(i as u32);
        i += 1;
    }
    table
}

static POWERS_OF_TEN: [i64; MAX_SCALE as usize + 1] = build_table();

/// Scale → multiplier lookup.
///
/// Scales past [`MAX_SCALE`] have no exact representation; they map to
/// `i64::MAX` rather than failing.
#[inline]
pub fn scale_multiplier(scale: u32) -> i64 {
    match POWERS_OF_TEN.get(scale as usize) {
        Some(&m) => m,
        None => i64::MAX,
    }
}

/// The factor `10^scale` relating a raw [`Time64`](super::Time64) to whole
/// seconds.
///
/// There are two named entry points, [`from_scale`](Self::from_scale) and
/// [`from_multiplier`](Self::from_multiplier), so a digit count can never be
/// mistaken for a precomputed factor.
///
/// # Example
/// ```
/// use time64_transform::numeric::ScaleMultiplier;
///
/// assert_eq!(ScaleMultiplier::from_scale(3).get(), 1_000);
/// assert_eq!(ScaleMultiplier::from_multiplier(1_000).scale(), Some(3));
/// assert_eq!(ScaleMultiplier::default().get(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ScaleMultiplier(i64);

impl ScaleMultiplier {
    /// Multiplier of a value without fractional part.
    pub const ONE: Self = Self(1);

    /// Millisecond precision (scale 3).
    pub const MILLIS: Self = Self(pow10(3));

    /// Microsecond precision (scale 6).
    pub const MICROS: Self = Self(pow10(6));

    /// Nanosecond precision (scale 9).
    pub const NANOS: Self = Self(pow10(9));

    /// Look the multiplier up from a digit count.
    ///
    /// Out-of-range scales are not rejected; see [`scale_multiplier`].
    #[inline]
    pub fn from_scale(scale: u32) -> Self {
        if scale > MAX_SCALE {
            tracing::debug!(scale, "scale past exact range, using i64::MAX multiplier");
        }
        Self(scale_multiplier(scale))
    }

    /// Wrap a precomputed multiplier as-is.
    ///
    /// Values below 1 are accepted; dividing by them is the caller's concern.
    #[inline]
    pub const fn from_multiplier(multiplier: i64) -> Self {
        Self(multiplier)
    }

    /// Checked variant of [`from_scale`](Self::from_scale).
    ///
    /// # Errors
    /// Returns `ScaleOutOfRange` if `scale > 18`.
    pub fn try_from_scale(scale: u32) -> NumericResult<Self> {
        POWERS_OF_TEN
            .get(scale as usize)
            .map(|&m| Self(m))
            .ok_or(NumericError::ScaleOutOfRange(scale))
    }

    /// Checked variant of [`from_multiplier`](Self::from_multiplier).
    ///
    /// # Errors
    /// Returns `InvalidMultiplier` if `multiplier < 1`.
    pub fn try_from_multiplier(multiplier: i64) -> NumericResult<Self> {
        if multiplier < 1 {
            return Err(NumericError::InvalidMultiplier(multiplier));
        }
        Ok(Self(multiplier))
    }

    /// The raw factor.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Digit count, when the multiplier is an exact power of ten.
    pub fn scale(self) -> Option<u32> {
        POWERS_OF_TEN
            .iter()
            .position(|&m| m == self.0)
            .map(|p| p as u32)
    }
}

impl Default for ScaleMultiplier {
    #[inline]
    fn default() -> Self {
        Self::ONE
    }
}

impl From<ScaleMultiplier> for i64 {
    #[inline]
    fn from(m: ScaleMultiplier) -> Self {
        m.0
    }
}

impl fmt::Debug for ScaleMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaleMultiplier({})", self.0)
    }
}

impl fmt::Display for ScaleMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
