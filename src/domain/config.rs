// ============================================================================
// Scale Configuration
// How an adapter learns the precision of the timestamps it reads
// ============================================================================

use crate::numeric::{NumericError, ScaleMultiplier, MAX_SCALE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision of a timestamp column, given either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScaleConfig {
    /// Number of fractional digits (0 - 18)
    Scale(u32),
    /// Precomputed factor, at least 1
    Multiplier(i64),
}

impl ScaleConfig {
    /// Second precision
    pub fn seconds() -> Self {
        ScaleConfig::Scale(0)
    }

    /// Millisecond precision
    pub fn millis() -> Self {
        ScaleConfig::Scale(3)
    }

    /// Microsecond precision
    pub fn micros() -> Self {
        ScaleConfig::Scale(6)
    }

    /// Nanosecond precision
    pub fn nanos() -> Self {
        ScaleConfig::Scale(9)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), NumericError> {
        match *self {
            ScaleConfig::Scale(scale) if scale > MAX_SCALE => {
                Err(NumericError::ScaleOutOfRange(scale))
            }
            ScaleConfig::Multiplier(m) if m < 1 => Err(NumericError::InvalidMultiplier(m)),
            _ => Ok(()),
        }
    }

    /// Resolve to a validated multiplier.
    pub fn multiplier(&self) -> Result<ScaleMultiplier, NumericError> {
        match *self {
            ScaleConfig::Scale(scale) => ScaleMultiplier::try_from_scale(scale),
            ScaleConfig::Multiplier(m) => ScaleMultiplier::try_from_multiplier(m),
        }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        ScaleConfig::Multiplier(1)
    }
}
