//! Structured logging for the GwScan bot.
//!
//! Console output plus optional daily-rotated JSON files, and scrubbing of
//! credentials from text before it is logged.

pub mod logger;
pub mod redact;

pub use logger::{init_logger, LogGuard};
pub use redact::redact_sensitive_data;
