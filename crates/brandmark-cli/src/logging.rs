//! Diagnostic logging for the scripts.
//!
//! Logs go to stderr so they never mix with the status lines on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global `tracing` subscriber.
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// `RUST_LOG` only adjusts log verbosity; it has no effect on what the
/// scripts read, write or print.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber installed by an earlier call stays in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
