// ============================================================================
// Time64 Transform Library
// Date/time transforms over fixed-point decimal timestamps
// ============================================================================

//! # Time64 Transform
//!
//! Run date/time transforms over fixed-point timestamps (raw ticks at a
//! runtime decimal scale) without writing decimal arithmetic in every
//! transform.
//!
//! ## Features
//!
//! - **Compile-time shape resolution**: a transform declares which call
//!   shapes it implements; the adapter picks the highest-priority one with no
//!   runtime branching
//! - **Sign-correct splitting**: whole seconds are floored for timestamps
//!   before the epoch
//! - **Automatic reassembly** of component results at the input's scale
//! - **Pass-through** of plain day numbers and second counts
//!
//! ## Example
//!
//! ```rust
//! use time64_transform::prelude::*;
//!
//! // Millisecond timestamps
//! let to_second = TransformTime64::<ToSecond>::from_scale(3);
//! let start_of_second = TransformTime64::<ToStartOfSecond>::from_scale(3);
//!
//! let t = Time64::from_raw(61_500); // 00:01:01.500
//!
//! assert_eq!(to_second.apply(t, ()), 1);
//! assert_eq!(start_of_second.apply(t, ()), Time64::from_raw(61_000));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod transforms;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::ScaleConfig;
    pub use crate::engine::{
        create_from_config, CallShape, TransformTime64, TransformTime64Builder,
    };
    pub use crate::interfaces::{
        Absent, Execute, Exposed, Extended, Reassemble, Scaled, Standard, Transform,
    };
    pub use crate::numeric::{DecimalComponents, NumericError, ScaleMultiplier, Time64};
    pub use crate::transforms::{
        ToDayNum, ToSecond, ToStartOfInterval, ToStartOfSecond, ToUnixTimestamp,
    };
}
