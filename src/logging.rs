//! Logging initialization.
//!
//! Diagnostics go to stderr so they never interleave with the menu on stdout.
//! The level is controlled by the `RUST_LOG` environment variable and
//! defaults to `warn`, e.g. `RUST_LOG=debug` traces every issue, undo and redo.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Calling it more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time();

    // Fails only when a subscriber is already set.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized");
    }
}
