//! Helpers shared by the integration tests.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by inet and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see every rejected input when the `tracing` feature is enabled:
///   RUST_LOG=inet=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}
