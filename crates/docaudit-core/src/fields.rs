//! Field-presence semantics for metadata JSON.
//!
//! Presence scoring distinguishes three cases for `object[key]`: the key is
//! absent, the key is present but holds an empty value, or the key holds a
//! real value. Only the last case scores. "Empty" covers JSON `null`,
//! `false`, numeric zero, `""`, `[]`, and `{}`.

use serde_json::Value;

/// Outcome of looking up a required field on a metadata object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldPresence<'a> {
    /// Key absent (or the container is not an object).
    Missing,
    /// Key present but empty per the rules above.
    Empty,
    /// Key present with a non-empty value.
    Present(&'a Value),
}

impl FieldPresence<'_> {
    /// Whether the field scores for presence checks.
    pub fn scores(&self) -> bool {
        matches!(self, FieldPresence::Present(_))
    }
}

/// Look up `key` on `container` and classify the result.
pub fn field_presence<'a>(container: &'a Value, key: &str) -> FieldPresence<'a> {
    match container.get(key) {
        None => FieldPresence::Missing,
        Some(value) if is_empty_value(value) => FieldPresence::Empty,
        Some(value) => FieldPresence::Present(value),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => {
            n.as_i64() == Some(0) || n.as_u64() == Some(0) || n.as_f64() == Some(0.0)
        }
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
