//! Tracing setup for the fxml-check binary.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize console logging on stderr.
///
/// `RUST_LOG` wins over `level` when set. Stdout is left to the report.
/// Calling this more than once is a no-op.
pub fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
