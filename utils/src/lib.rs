//! Shared utilities for the civic ledger.

pub mod format;
pub mod logging;

pub use format::{format_duration, format_tokens};
pub use logging::{init_logging, LogFormat, LoggingError};
