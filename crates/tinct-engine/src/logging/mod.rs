//! Logging utilities.
//!
//! Crates in the workspace log through the `log` facade only; this module is
//! the one place that installs a backend (`env_logger`).

mod init;

pub use init::{init_logging, LoggingConfig};
