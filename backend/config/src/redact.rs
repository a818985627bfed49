//! Config redaction: produce safe-to-log config snapshots by masking secrets.

use serde_json::Value;

use crate::schema::BotConfig;

const SENSITIVE_KEYS: &[&str] = &["discord_token", "public_key"];

/// Serialize the config with every secret replaced by `"***"`.
pub fn redact(config: &BotConfig) -> Value {
    let mut value = serde_json::to_value(config).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        for key in SENSITIVE_KEYS {
            if let Some(field) = map.get_mut(*key) {
                if !field.is_null() {
                    *field = Value::String("***".to_string());
                }
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn masks_token_but_keeps_server() {
        let env: HashMap<String, String> = [
            ("DISCORD_TOKEN", "secret-token"),
            ("SERVER", "https://api.gwscan.com/graphql"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let redacted = redact(&BotConfig::from_map(&env));
        assert_eq!(redacted["discord_token"], "***");
        assert!(redacted["public_key"].is_null());
        assert_eq!(redacted["server"], "https://api.gwscan.com/graphql");
        assert!(!redacted.to_string().contains("secret-token"));
    }
}
