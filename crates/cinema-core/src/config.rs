//! Helpers for reading service configuration from environment variables.

use std::str::FromStr;

/// Parse an optional raw value, falling back to `default` when it is absent
/// or does not parse.
pub fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Parse a boolean flag. Accepts `1/0`, `true/false`, `yes/no`, `on/off`
/// in any case; anything else yields `default`.
pub fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
