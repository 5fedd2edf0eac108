//! Logging utilities
//!
//! The engine logs through the `log` facade; hosts pick the backend. These
//! helpers wire up `env_logger` for binaries and tests that want one.

pub use log::{debug, error, info, trace, warn};

/// Initialize logging from the `RUST_LOG` environment variable.
pub fn init() {
    env_logger::init();
}

/// Initialize logging with an explicit maximum level, ignoring `RUST_LOG`.
pub fn init_with_level(level: log::LevelFilter) {
    env_logger::Builder::new().filter_level(level).init();
}
