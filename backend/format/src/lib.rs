//! Display formatting for explorer values.
//!
//! Token amounts arrive as arbitrary-length integer strings scaled by a
//! per-token number of decimal places. They are rescaled by shifting the
//! decimal point over the digit string, so no precision is ever lost to
//! floating point and values wider than any machine integer still format.

pub mod time;
pub mod value;

pub use time::{normalize_timestamp, TIMESTAMP_FORMAT};
pub use value::{format_value, format_value_with, group_thousands, DISPLAY_PRECISION};

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "-";

/// The value itself, or [`PLACEHOLDER`] when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
