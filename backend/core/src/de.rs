//! Lenient field deserializers for explorer records.
//!
//! The explorer is not consistent about whether integers (block numbers,
//! timestamps, counters) arrive as JSON numbers or strings.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Accepts a string, a number, or null and yields `Option<String>`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Accepts a non-negative integer as a number or a numeric string.
///
/// Anything else (fractions, negatives, text, objects) becomes `None`, so one
/// malformed field never fails the surrounding record.
pub fn opt_u32_lenient<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok().or_else(|| {
            debug!(value = %s, "Ignoring unparseable integer field");
            None
        }),
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()).or_else(|| {
            debug!(value = %n, "Ignoring out-of-range integer field");
            None
        }),
        Some(other) => {
            debug!(value = %other, "Ignoring non-numeric integer field");
            return Ok(None);
        }
    };
    Ok(parsed)
}
