use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so they never mix with the listing on stdout.
/// `RUST_LOG` selects the level, `warn` by default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
