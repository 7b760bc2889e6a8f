//! Diagnostic logging.
//!
//! Everything is written to stderr through `tracing`, so stdout stays clean
//! for command output.
//!
//! # Environment Variables
//!
//! - `MEMOPAD_LOG`: filter directive (like `RUST_LOG`), e.g. `memopad=debug`

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MEMOPAD_LOG";

/// Picks the filter: `MEMOPAD_LOG` wins, then `-v`, then warnings only.
pub fn filter_directive(verbose: bool) -> String {
    match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => "memopad=debug".to_string(),
        _ => "warn".to_string(),
    }
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_new(filter_directive(verbose))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
