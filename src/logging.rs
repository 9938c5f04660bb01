use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Output goes to stderr so the report utility can stream CSV on stdout.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
