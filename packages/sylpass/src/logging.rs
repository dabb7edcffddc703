//! Logging setup
//!
//! Library code logs through `tracing`, which forwards to `log` when no
//! subscriber is installed; `env_logger` prints the records. Levels are
//! controlled with `RUST_LOG`, e.g. `RUST_LOG=sylpass=debug`.

use std::sync::Once;
use tracing::debug;

static INIT_LOGGER: Once = Once::new();

/// Process-wide logger initialization
pub struct LoggingInit;

impl LoggingInit {
    /// Initialize logging (call once at application startup)
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            debug!("logging initialized");
        });
    }

    /// Initialize logging for tests
    ///
    /// Safe to call from every test; later calls are ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Initialize logging with a default level; `RUST_LOG` still overrides it
    pub fn init_with_level(level: log::LevelFilter) {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .format_timestamp_micros()
                .init();

            debug!(%level, "logging initialized");
        });
    }
}
