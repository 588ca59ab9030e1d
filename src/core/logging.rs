//! Logging bootstrap
//!
//! Installs a `tracing_subscriber::fmt` subscriber. The filter comes from
//! `RUST_LOG` when set, otherwise from [`GameSettings::log_filter`].
//!
//! [`GameSettings::log_filter`]: crate::core::GameSettings::log_filter

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the configured filter parses
const FALLBACK_FILTER: &str = "info";

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed (tests, or a
/// second call), in which case nothing changes.
pub fn init_logging(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
