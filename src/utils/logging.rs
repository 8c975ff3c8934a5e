// ============================================================================
// Logging Setup
// Subscriber for the tracing events emitted by the crate
// ============================================================================

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` if unset. A second call is a no-op.
///
/// # Example
/// ```bash
/// RUST_LOG=time64_transform=trace cargo run --example basic_usage --features logging
/// ```
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
