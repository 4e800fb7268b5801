//! Diagnostic logging on stderr.
//!
//! Level precedence: `RUST_LOG`, then the level passed in (command line or
//! config file), then `info`. `--quiet` lowers the default to `error`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const DEFAULT_LEVEL: &str = "info";
const QUIET_LEVEL: &str = "error";

/// The directive used when `RUST_LOG` is not set.
#[must_use]
pub fn resolve_level(level: Option<&str>, quiet: bool) -> &str {
    if quiet {
        return QUIET_LEVEL;
    }
    level
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LEVEL)
}

#[must_use]
pub fn build_filter(level: Option<&str>, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(resolve_level(level, quiet))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(level: Option<&str>, quiet: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level, quiet))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
