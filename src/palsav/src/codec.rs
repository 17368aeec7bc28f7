//! Identifier and time codecs.
//!
//! Player and base identifiers travel through the save as hyphenated hex
//! UUIDs but are reported as decimal strings. Timestamps are stored as
//! 100-nanosecond ticks relative to an embedded reference tick and need a
//! wall-clock anchor (the save file's mtime) to become absolute.

use chrono::{TimeZone, Utc};
use serde_json::Value;

/// Ticks per second (ticks are 100 ns units).
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Convert a UID to its decimal string form.
///
/// Takes the first hyphen-delimited hex segment and renders it base-10.
/// An all-digit input with no hyphen is already decimal and passes through,
/// so the function is idempotent on its own output. Non-hex input is a
/// caller contract violation and passes through unchanged.
pub fn uid_to_decimal(raw: &str) -> String {
    if !raw.contains('-') && !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }
    let hex_part = raw.split('-').next().unwrap_or(raw);
    u128::from_str_radix(hex_part, 16)
        .map(|n| n.to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Convert a UID node from the property tree to its decimal string form.
///
/// Accepts the wrapped `{"value": ...}` shape, a bare string, or a raw
/// integer node. Anything else renders as an empty string.
pub fn uid_value_to_decimal(value: &Value) -> String {
    match value {
        Value::String(s) => uid_to_decimal(s),
        Value::Number(n) => n.to_string(),
        Value::Object(_) => value.get("value").map(uid_value_to_decimal).unwrap_or_default(),
        _ => String::new(),
    }
}

/// Convert a save tick to an absolute UTC timestamp string.
///
/// `anchor_secs` is the wall-clock second count the reference tick maps to
/// (the save file's modification time). Renders RFC-3339-like with a bare
/// `Z` suffix; out-of-range seconds render as an empty string.
pub fn tick_to_timestamp(tick: i64, reference_tick: i64, anchor_secs: i64) -> String {
    let secs = anchor_secs + (tick - reference_tick).div_euclid(TICKS_PER_SECOND);
    match Utc.timestamp_opt(secs, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uid_first_hex_segment() {
        assert_eq!(
            uid_to_decimal("550e8400-e29b-41d4-a716-446655440000"),
            "1427014656"
        );
    }

    #[test]
    fn test_uid_idempotent_on_decimal_output() {
        let once = uid_to_decimal("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(uid_to_decimal(&once), once);
    }

    #[test]
    fn test_uid_malformed_passes_through() {
        assert_eq!(uid_to_decimal("not-hex-at-all"), "not-hex-at-all");
    }

    #[test]
    fn test_uid_value_shapes() {
        assert_eq!(
            uid_value_to_decimal(&json!({"value": "00000001-0000-0000-0000-000000000000"})),
            "1"
        );
        assert_eq!(uid_value_to_decimal(&json!("0000000a-0000")), "10");
        assert_eq!(uid_value_to_decimal(&json!(12345)), "12345");
        assert_eq!(uid_value_to_decimal(&json!(null)), "");
    }

    #[test]
    fn test_tick_to_timestamp() {
        // One second past the anchor: 1_700_000_001 = 2023-11-14T22:13:21 UTC
        assert_eq!(
            tick_to_timestamp(20_000_000, 10_000_000, 1_700_000_000),
            "2023-11-14T22:13:21Z"
        );
    }

    #[test]
    fn test_tick_equal_to_reference_is_anchor() {
        assert_eq!(
            tick_to_timestamp(10_000_000, 10_000_000, 1_700_000_000),
            "2023-11-14T22:13:20Z"
        );
    }

    #[test]
    fn test_tick_before_reference_floors() {
        // Half a second before the anchor floors to the previous second
        assert_eq!(
            tick_to_timestamp(5_000_000, 10_000_000, 1_700_000_000),
            "2023-11-14T22:13:19Z"
        );
    }
}
