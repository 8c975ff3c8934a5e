// ============================================================================
// Numeric Module
// Fixed-point timestamp arithmetic
// ============================================================================
//
// This module provides:
// - Time64: Timestamp as raw ticks at a runtime decimal scale
// - ScaleMultiplier: The 10^scale factor, with named construction paths
// - DecimalComponents + split/floor_correct/reassemble: whole/fraction math
// - NumericError: Error types for checked conversions
//
// Design principles:
// - No floating-point operations
// - The transform path is infallible; overflow wraps instead of panicking
// - Checked conversions return Result at API boundaries

mod components;
mod errors;
mod scale;
mod time64;

pub use components::{
    floor_correct, fractional_part, reassemble, split, whole_part, DecimalComponents,
};
pub use errors::{NumericError, NumericResult};
pub use scale::{scale_multiplier, ScaleMultiplier, MAX_SCALE};
pub use time64::Time64;
