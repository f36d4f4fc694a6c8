//! Logging setup and change monitoring.

mod change_logger;
mod logging;

pub use change_logger::ChangeLogger;
pub use logging::setup_logging;
