// ============================================================================
// Numeric Errors
// Error types for scale and temporal value conversions
// ============================================================================

use std::fmt;

/// Errors reported at conversion and configuration boundaries.
///
/// The transform path itself never produces these: splitting, reassembly
/// and dispatch are infallible and wrap on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the i64 range
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// Scale has no exact i64 power of ten
    ScaleOutOfRange(u32),
    /// Multiplier is zero or negative
    InvalidMultiplier(i64),
    /// Rounding interval is zero or negative
    InvalidInterval(i64),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded i64 range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ScaleOutOfRange(scale) => {
                write!(f, "scale {} out of range: maximum is 18", scale)
            },
            NumericError::InvalidMultiplier(m) => {
                write!(f, "invalid scale multiplier {}: must be at least 1", m)
            },
            NumericError::InvalidInterval(interval) => {
                write!(f, "invalid interval {}: must be positive", interval)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
