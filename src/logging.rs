//! Logging setup
//!
//! The crate logs through `tracing`: client creation at info, every request
//! and its response status at debug, retries at debug and abandoned retries
//! at warn. These helpers install a `tracing-subscriber` formatter for
//! programs that have no subscriber of their own.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "sofa=info";

/// Install a formatter filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
///
/// Does nothing if a global subscriber is already set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Install a formatter that shows everything at `level` and above
pub fn init_with_level(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_line_number(true)
        .try_init();
}
