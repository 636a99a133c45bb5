//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Call once at application startup. Panics if a logger is already set.
pub fn init() {
    env_logger::init();
}

/// Initialize logging for test runs
///
/// Captures output per test and tolerates repeated initialization across
/// the test harness.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
