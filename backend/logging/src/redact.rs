//! Log Redaction Layer
//!
//! Scrubs bot tokens and bearer credentials from strings prior to logging.

use regex::Regex;
use std::sync::LazyLock;

static DISCORD_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[MNO][A-Za-z0-9_\-]{23,27}\.[A-Za-z0-9_\-]{6}\.[A-Za-z0-9_\-]{27,40}").unwrap()
});
static BEARER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:Bearer|Bot)\s+[A-Za-z0-9\-\._~+/]{20,}=*").unwrap());

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = DISCORD_TOKEN_RE.replace_all(input, "[REDACTED_TOKEN]");
    BEARER_RE.replace_all(&redacted, "[REDACTED_TOKEN]").to_string()
}
