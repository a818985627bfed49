//! Reading configuration from environment variables.
//!
//! Blank variables are treated as unset.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::schema::BotConfig;

pub const DEFAULT_EXPLORER_URL: &str = "https://www.gwscan.com";
pub const DEFAULT_LOGO_URL: &str = "https://www.gwscan.com/icons/nervina-logo.svg";
pub const DEFAULT_EMBED_COLOR: &str = "#0099ff";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Load a `.env` file from the working directory or its parents, if any.
///
/// Variables already present in the environment are not overwritten.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to read .env"),
    }
}

impl BotConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_map(env: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| env.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            discord_token: get("DISCORD_TOKEN"),
            public_key: get("PUBLIC_KEY"),
            server: get("SERVER"),
            app_id: get("APP_ID"),
            guild_id: get("GUILD_ID"),
            explorer_url: get("GWSCAN_URL").unwrap_or_else(|| DEFAULT_EXPLORER_URL.to_string()),
            logo_url: get("GWSCAN_LOGO_URL").unwrap_or_else(|| DEFAULT_LOGO_URL.to_string()),
            embed_color: get("GWSCAN_EMBED_COLOR")
                .unwrap_or_else(|| DEFAULT_EMBED_COLOR.to_string()),
            log_level: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: get("GWSCAN_LOG_DIR").map(PathBuf::from),
        }
    }
}
