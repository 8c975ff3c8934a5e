// ============================================================================
// Adapter Factory
// Creates Time64 adapters from validated configuration
// ============================================================================

use crate::domain::config::ScaleConfig;
use crate::engine::TransformTime64;
use crate::interfaces::Transform;
use crate::numeric::NumericError;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an adapter from configuration
///
/// Unlike the direct constructors, out-of-range scales and non-positive
/// multipliers are rejected here.
///
/// # Example
/// ```
/// use time64_transform::prelude::*;
///
/// let adapter = create_from_config::<ToUnixTimestamp>(&ScaleConfig::millis()).unwrap();
/// assert_eq!(adapter.scale_multiplier().get(), 1_000);
/// ```
pub fn create_from_config<T: Transform>(
    config: &ScaleConfig,
) -> Result<TransformTime64<T>, NumericError> {
    let multiplier = config.multiplier().inspect_err(|e| {
        tracing::debug!(transform = T::NAME, error = %e, "rejected scale config");
    })?;

    Ok(TransformTime64::with_multiplier(multiplier))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating adapters with fluent API
///
/// # Example
/// ```
/// use time64_transform::prelude::*;
///
/// let adapter = TransformTime64Builder::<ToSecond>::new()
///     .with_scale(6)
///     .build()
///     .unwrap();
/// assert_eq!(adapter.scale_multiplier().get(), 1_000_000);
/// ```
pub struct TransformTime64Builder<T> {
    config: ScaleConfig,
    _transform: std::marker::PhantomData<T>,
}

impl<T: Transform> TransformTime64Builder<T> {
    /// Create a new builder with unit multiplier
    pub fn new() -> Self {
        Self {
            config: ScaleConfig::default(),
            _transform: std::marker::PhantomData,
        }
    }

    /// Set precision as a digit count
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.config = ScaleConfig::Scale(scale);
        self
    }

    /// Set precision as a precomputed multiplier
    pub fn with_multiplier(mut self, multiplier: i64) -> Self {
        self.config = ScaleConfig::Multiplier(multiplier);
        self
    }

    /// Take precision from an existing configuration
    pub fn with_config(mut self, config: ScaleConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Build the adapter
    pub fn build(self) -> Result<TransformTime64<T>, NumericError> {
        create_from_config(&self.config)
    }
}

impl<T: Transform> Default for TransformTime64Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ScaleMultiplier;
    use crate::transforms::ToUnixTimestamp;

    #[test]
    fn test_create_from_config() {
        let adapter = create_from_config::<ToUnixTimestamp>(&ScaleConfig::micros()).unwrap();
        assert_eq!(adapter.scale_multiplier(), ScaleMultiplier::MICROS);
    }

    #[test]
    fn test_create_from_invalid_config() {
        let result = create_from_config::<ToUnixTimestamp>(&ScaleConfig::Scale(25));
        assert_eq!(result.unwrap_err(), NumericError::ScaleOutOfRange(25));

        let result = create_from_config::<ToUnixTimestamp>(&ScaleConfig::Multiplier(-1));
        assert_eq!(result.unwrap_err(), NumericError::InvalidMultiplier(-1));
    }

    #[test]
    fn test_builder_defaults() {
        let builder = TransformTime64Builder::<ToUnixTimestamp>::default();
        assert_eq!(builder.config(), &ScaleConfig::Multiplier(1));
        assert_eq!(builder.build().unwrap().scale_multiplier().get(), 1);
    }

    #[test]
    fn test_builder_last_setting_wins() {
        let adapter = TransformTime64Builder::<ToUnixTimestamp>::new()
            .with_scale(9)
            .with_multiplier(1_000)
            .build()
            .unwrap();
        assert_eq!(adapter.scale_multiplier().get(), 1_000);

        let adapter = TransformTime64Builder::<ToUnixTimestamp>::new()
            .with_config(ScaleConfig::nanos())
            .build()
            .unwrap();
        assert_eq!(adapter.scale_multiplier(), ScaleMultiplier::NANOS);
    }
}
