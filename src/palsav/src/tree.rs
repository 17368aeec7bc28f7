//! Defensive navigation of the decoded property tree.
//!
//! The external decoder wraps every leaf as `{"value": V}` and record arrays
//! as `{"value": {"values": [...]}}` or `{"value": [...]}`. Any expected key
//! may be absent, so every accessor here returns `Option` and never panics
//! on a shape mismatch.

use serde_json::Value;

/// Unwrap one `{"value": ...}` level under `key`.
pub fn value_of<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.get(key)?.get("value")
}

/// Read an integer leaf at `key.value`, accepting float-encoded integers.
pub fn int_of(node: &Value, key: &str) -> Option<i64> {
    as_int(value_of(node, key)?)
}

/// Read a float leaf at `key.value`.
pub fn float_of(node: &Value, key: &str) -> Option<f64> {
    value_of(node, key)?.as_f64()
}

/// Read a string leaf at `key.value`.
pub fn str_of<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    value_of(node, key)?.as_str()
}

/// Read a boolean leaf at `key.value`.
pub fn bool_of(node: &Value, key: &str) -> Option<bool> {
    value_of(node, key)?.as_bool()
}

/// Read the nested stat shape `key.value.Value.value` used by HP, shield,
/// and status-point fields.
pub fn stat_of(node: &Value, key: &str) -> Option<i64> {
    as_int(value_of(node, key)?.get("Value")?.get("value")?)
}

/// Read the enum tag shape `key.value.value` used by Gender and GroupType.
pub fn enum_of<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    value_of(node, key)?.get("value")?.as_str()
}

/// Read a record array at `key.value.values` or directly at `key.value`.
pub fn values_of<'a>(node: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    let value = value_of(node, key)?;
    match value.get("values") {
        Some(values) => values.as_array(),
        None => value.as_array(),
    }
}

/// Integer coercion: the decoder sometimes emits integral floats.
fn as_int(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}
