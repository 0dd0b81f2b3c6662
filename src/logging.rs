//! Structured logging for the command line tool.

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber writing to stderr, so report tables on stdout
/// stay clean.
///
/// Respects the `COHORT_LOG` environment variable for filtering and defaults
/// to `info` when it is unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("COHORT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
