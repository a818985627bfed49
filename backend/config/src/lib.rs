//! `gwscan-config` — runtime configuration for the GwScan bot.
//!
//! Provides:
//! - Typed config read from the process environment (with `.env` support)
//! - Per-mode validation with every problem reported in one pass
//! - Redacted snapshots safe for logging

pub mod env;
pub mod redact;
pub mod schema;
pub mod validation;

pub use env::{load_dotenv, DEFAULT_EMBED_COLOR, DEFAULT_EXPLORER_URL, DEFAULT_LOGO_URL};
pub use redact::redact;
pub use schema::BotConfig;
pub use validation::{validate, ConfigError, ConfigValidationError, Mode, ValidationReport};

