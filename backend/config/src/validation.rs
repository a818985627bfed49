//! Config validation with every problem reported in one pass.

use thiserror::Error;

use crate::schema::BotConfig;

/// What the process is about to do; decides which settings are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Connect to Discord and answer commands.
    Serve,
    /// Register the slash commands with a guild.
    Deploy,
    /// Run one command locally against the explorer.
    Query,
    /// Print the command schema; needs nothing.
    Schema,
}

/// A config validation error with variable name and message.
#[derive(Debug, Error)]
#[error("{path}: {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// All errors found by [`validate`], joined for display.
#[derive(Debug, Error)]
#[error(
    "invalid configuration: {}",
    .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
)]
pub struct ConfigError(pub Vec<ConfigValidationError>);

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError(self.errors))
        }
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError { path: path.into(), message: message.into() });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError { path: path.into(), message: message.into() });
    }
}

/// Validate the config for `mode`.
pub fn validate(config: &BotConfig, mode: Mode) -> ValidationReport {
    let mut report = ValidationReport::default();

    match mode {
        Mode::Serve => {
            require(&mut report, "DISCORD_TOKEN", config.discord_token.as_deref());
            validate_server(config, &mut report);
            validate_presentation(config, &mut report);
        }
        Mode::Deploy => {
            require(&mut report, "DISCORD_TOKEN", config.discord_token.as_deref());
            validate_snowflake(&mut report, "APP_ID", config.app_id.as_deref());
            validate_snowflake(&mut report, "GUILD_ID", config.guild_id.as_deref());
        }
        Mode::Query => {
            validate_server(config, &mut report);
            validate_presentation(config, &mut report);
        }
        Mode::Schema => {}
    }

    report
}

fn require(report: &mut ValidationReport, var: &str, value: Option<&str>) -> bool {
    if value.is_none() {
        report.error(var, "is required");
        return false;
    }
    true
}

fn validate_server(config: &BotConfig, report: &mut ValidationReport) {
    if !require(report, "SERVER", config.server.as_deref()) {
        return;
    }
    if let Some(server) = config.server.as_deref() {
        if !is_http_url(server) {
            report.error("SERVER", format!("must be an http(s) URL, got `{server}`"));
        }
    }
}

fn validate_presentation(config: &BotConfig, report: &mut ValidationReport) {
    if !is_http_url(&config.explorer_url) {
        report.error(
            "GWSCAN_URL",
            format!("must be an http(s) URL, got `{}`", config.explorer_url),
        );
    }
    if !is_http_url(&config.logo_url) {
        report.warn("GWSCAN_LOGO_URL", "is not an http(s) URL; cards may render without a logo");
    }
    if config.embed_color_rgb().is_none() {
        report.error(
            "GWSCAN_EMBED_COLOR",
            format!("must be `#RRGGBB`, got `{}`", config.embed_color),
        );
    }
}

fn validate_snowflake(report: &mut ValidationReport, var: &str, value: Option<&str>) {
    if !require(report, var, value) {
        return;
    }
    if let Some(raw) = value {
        if raw.parse::<u64>().map_or(true, |id| id == 0) {
            report.error(var, format!("must be a numeric Discord id, got `{raw}`"));
        }
    }
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> BotConfig {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        BotConfig::from_map(&env)
    }

    #[test]
    fn serve_needs_token_and_server() {
        let report = validate(&config(&[]), Mode::Serve);
        let paths: Vec<&str> = report.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["DISCORD_TOKEN", "SERVER"]);
    }

    #[test]
    fn serve_ok_with_defaults() {
        let report = validate(
            &config(&[("DISCORD_TOKEN", "t"), ("SERVER", "https://api.gwscan.com/graphql")]),
            Mode::Serve,
        );
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn server_must_be_http() {
        let report = validate(&config(&[("SERVER", "ftp://x")]), Mode::Query);
        assert!(!report.is_valid());
        assert!(report.errors[0].message.contains("http(s)"));
    }

    #[test]
    fn malformed_server_urls_are_rejected() {
        let servers = [
            "http://not a url",
            "https://:::",
            "https://exa mple.com/graphql",
            "https://",
        ];
        for server in servers {
            let report = validate(&config(&[("SERVER", server)]), Mode::Query);
            assert!(!report.is_valid(), "{server} should be rejected");
            assert_eq!(report.errors[0].path, "SERVER");
        }
        let report = validate(&config(&[("SERVER", "http://localhost:4000/graphql")]), Mode::Query);
        assert!(report.is_valid());
    }

    #[test]
    fn deploy_needs_numeric_ids() {
        let report = validate(
            &config(&[("DISCORD_TOKEN", "t"), ("APP_ID", "abc"), ("GUILD_ID", "42")]),
            Mode::Deploy,
        );
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "APP_ID");
    }

    #[test]
    fn bad_color_is_an_error() {
        let report = validate(
            &config(&[("SERVER", "http://localhost:4000/graphql"), ("GWSCAN_EMBED_COLOR", "pink")]),
            Mode::Query,
        );
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "GWSCAN_EMBED_COLOR");
    }

    #[test]
    fn schema_needs_nothing() {
        assert!(validate(&config(&[]), Mode::Schema).is_valid());
    }

    #[test]
    fn errors_are_joined() {
        let err = validate(&config(&[]), Mode::Serve).into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: DISCORD_TOKEN: is required; SERVER: is required"
        );
    }
}
