//! Structured logging setup for plateproxy.

pub mod logger;

pub use logger::{bootstrap_logger, bootstrap_subscriber, build_filter, init_logger, LoggerGuard};
