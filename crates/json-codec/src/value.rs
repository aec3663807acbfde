//! [`JsonValue`] — the tree produced by decoding and consumed by encoding.

use crate::error::JsonError;

/// A JSON document as a tagged union.
///
/// Objects are ordered key-value pairs; insertion order is preserved through
/// a decode/encode round-trip. Keys are unique within one object.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    /// All JSON numbers are double-precision floats.
    Number(f64),
    Str(String),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::Str(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, JsonValue)]> {
        match self {
            JsonValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a field on an object. Fails when `self` is not an object.
    pub fn get(&self, key: &str) -> Result<Option<&JsonValue>, JsonError> {
        match self {
            JsonValue::Object(entries) => {
                Ok(entries.iter().find(|(k, _)| k == key).map(|(_, v)| v))
            }
            other => Err(JsonError::TypeMismatch {
                expected: "object",
                found: other.type_name(),
            }),
        }
    }

    /// Mutable field lookup. Fails when `self` is not an object.
    pub fn get_mut(&mut self, key: &str) -> Result<Option<&mut JsonValue>, JsonError> {
        match self {
            JsonValue::Object(entries) => {
                Ok(entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v))
            }
            other => Err(JsonError::TypeMismatch {
                expected: "object",
                found: other.type_name(),
            }),
        }
    }

    /// Replace the entry for `key` in place, or append it when absent.
    ///
    /// An existing key keeps its position, so key order is stable under
    /// repeated mutation.
    pub fn set(&mut self, key: &str, value: impl Into<JsonValue>) -> Result<(), JsonError> {
        let value = value.into();
        match self {
            JsonValue::Object(entries) => {
                match entries.iter_mut().find(|(k, _)| k == key) {
                    Some((_, slot)) => *slot = value,
                    None => entries.push((key.to_string(), value)),
                }
                Ok(())
            }
            other => Err(JsonError::TypeMismatch {
                expected: "object",
                found: other.type_name(),
            }),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Number(n)
    }
}

impl From<i64> for JsonValue {
    fn from(n: i64) -> Self {
        JsonValue::Number(n as f64)
    }
}

impl From<i32> for JsonValue {
    fn from(n: i32) -> Self {
        JsonValue::Number(n as f64)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::Str(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::Str(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        JsonValue::Array(arr)
    }
}
