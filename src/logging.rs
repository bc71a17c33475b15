//! Tracing setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `kovol_core=debug`.
pub const LOG_ENV: &str = "KOVOL_LOG";

/// Installs a fmt subscriber writing to stderr. `verbose` lowers the
/// default level from warn to debug when `KOVOL_LOG` is unset.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}
