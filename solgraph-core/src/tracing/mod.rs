//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the solgraph tracing/logging system.
///
/// Reads the `SOLGRAPH_LOG` environment variable for per-subsystem log
/// levels, e.g. `SOLGRAPH_LOG=solgraph_analysis=debug`.
///
/// Falls back to `solgraph=info` if `SOLGRAPH_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SOLGRAPH_LOG")
            .unwrap_or_else(|_| EnvFilter::new("solgraph=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
