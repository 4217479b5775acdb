use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so stdout stays free for
/// workflow commands. Filtered by `RUST_LOG`, `info` when unset.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
