//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays clean for
//! command output (including `--json`). `PORTALKIT_LOG` takes an
//! `EnvFilter` directive and wins over `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "PORTALKIT_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "portalkit=debug" } else { "warn" }
}

/// Build the filter from `PORTALKIT_LOG`, falling back to the verbosity default
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
