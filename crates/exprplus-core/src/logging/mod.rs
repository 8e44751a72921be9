//! Logging utilities.
//!
//! The library only emits through the `log` facade. Hosts that have no logger
//! of their own can install the `env_logger` backend once with
//! [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
