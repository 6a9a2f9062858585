//! Logging setup and re-exported macros

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// Reads the `RUST_LOG` environment variable for filtering; unfiltered
/// output goes to standard error.
pub fn init() {
    env_logger::init();
}
