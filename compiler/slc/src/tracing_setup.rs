//! Tracing subscriber setup for the driver.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "SL_LOG";

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `SL_LOG` or
/// `RUST_LOG` is set, e.g. `SL_LOG=sl_lexer=trace` to see every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var(LOG_ENV).is_ok() {
            EnvFilter::from_env(LOG_ENV)
        } else if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
