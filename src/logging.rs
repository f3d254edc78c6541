//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays reserved for reports and the MCP
//! stdio transport. `TSCAT_LOG` takes `RUST_LOG`-style directives.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TSCAT_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "tscat=debug" } else { "warn" }
}

/// Build the filter from `TSCAT_LOG`, falling back to the verbosity default.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
