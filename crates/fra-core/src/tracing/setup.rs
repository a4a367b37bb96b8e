//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Default filter when `FRA_LOG` is unset or unparseable.
const DEFAULT_FILTER: &str = "fra_core=info,fra_analysis=info,fra_storage=info";

/// Initialize the FRA tracing/logging system.
///
/// Reads the `FRA_LOG` environment variable for per-crate log levels.
/// Format: `FRA_LOG=fra_analysis=debug,fra_storage=warn`
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
