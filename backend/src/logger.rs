use tracing_subscriber::EnvFilter;

/// Set up log levels and formatting
///
/// The level is controlled with RUST_LOG, "info" by default.
/// Lambda adds timestamps to every line, so these are omitted.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignore the error if a subscriber is already set, e.g. in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
}
