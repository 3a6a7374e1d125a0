use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log to stderr so stdout stays free for the run summary.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(filter)
        .init();
}
