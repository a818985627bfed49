use chrono::{DateTime, NaiveDateTime, Utc};

use crate::PLACEHOLDER;

/// The one absolute representation every timestamp is rendered in.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Unix values above this are taken to be milliseconds.
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Render an explorer timestamp as UTC wall-clock time.
///
/// Accepts RFC 3339, naive ISO 8601 (assumed UTC) and unix seconds or
/// milliseconds. Absent values become the placeholder; anything else that
/// cannot be parsed is shown as-is.
pub fn normalize_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    match parse_timestamp(raw) {
        Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    let unix: i64 = raw.parse().ok()?;
    if unix.abs() >= MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(unix)
    } else {
        DateTime::from_timestamp(unix, 0)
    }
}
