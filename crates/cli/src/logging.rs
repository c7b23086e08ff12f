//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `ROSSOC_LOG=rossoc_parser=trace`.
pub const LOG_ENV: &str = "ROSSOC_LOG";

/// Log to stderr so generated output and `--ir` JSON on stdout stay clean.
pub fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}
