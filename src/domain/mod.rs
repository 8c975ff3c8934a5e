// ============================================================================
// Domain Module
// Configuration types
// ============================================================================

pub mod config;

pub use config::ScaleConfig;
