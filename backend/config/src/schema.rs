use std::path::PathBuf;

use serde::Serialize;

/// Everything the bot reads from its environment.
#[derive(Debug, Clone, Serialize)]
pub struct BotConfig {
    /// Discord bot token (`DISCORD_TOKEN`).
    pub discord_token: Option<String>,
    /// Discord application public key (`PUBLIC_KEY`).
    pub public_key: Option<String>,
    /// GraphQL endpoint of the explorer (`SERVER`).
    pub server: Option<String>,
    /// Discord application id (`APP_ID`).
    pub app_id: Option<String>,
    /// Guild the slash commands are deployed to (`GUILD_ID`).
    pub guild_id: Option<String>,
    /// Explorer base URL used for reply links.
    pub explorer_url: String,
    /// Logo shown on reply cards.
    pub logo_url: String,
    /// Card color as `#RRGGBB`.
    pub embed_color: String,
    pub log_level: String,
    /// Directory for rolling JSON logs; console only when unset.
    pub log_dir: Option<PathBuf>,
}

impl BotConfig {
    /// Card color as a 24-bit RGB value, if `embed_color` is well formed.
    pub fn embed_color_rgb(&self) -> Option<u32> {
        parse_hex_color(&self.embed_color)
    }

    pub fn app_id_u64(&self) -> Option<u64> {
        self.app_id.as_deref().and_then(|v| v.trim().parse().ok())
    }

    pub fn guild_id_u64(&self) -> Option<u64> {
        self.guild_id.as_deref().and_then(|v| v.trim().parse().ok())
    }
}

pub(crate) fn parse_hex_color(raw: &str) -> Option<u32> {
    let hex = raw.trim().strip_prefix('#').unwrap_or(raw.trim());
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#0099ff"), Some(0x0099ff));
        assert_eq!(parse_hex_color("E03C8A"), Some(0xE03C8A));
        assert_eq!(parse_hex_color("#09f"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
