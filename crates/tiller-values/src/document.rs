//! Type tests and checked downcasts over the document model.
//!
//! Documents are plain `serde_json::Value`s. `Null` is a real variant and is
//! distinct from a key being absent from its table.

use crate::ValuesError;
use serde_json::{Map, Value};

/// A mapping from string keys to documents.
pub type Table = Map<String, Value>;

/// Whether the node is a table.
pub fn is_table(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Whether the node is a sequence.
pub fn is_sequence(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Whether the node is an explicit null.
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Whether the node is a string, number, or boolean.
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// Short name of the node's variant, used in error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "table",
    }
}

/// Expect a table or return a typed error.
pub fn expect_table<'a>(value: &'a Value, path: &str) -> Result<&'a Table, ValuesError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(type_mismatch(path, "table", other)),
    }
}

/// Expect a sequence or return a typed error.
pub fn expect_sequence<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Vec<Value>, ValuesError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(type_mismatch(path, "sequence", other)),
    }
}

/// Build a structured type-mismatch error.
pub(crate) fn type_mismatch(path: &str, expected: &'static str, found: &Value) -> ValuesError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ValuesError::TypeMismatch {
        path: normalized_path.to_string(),
        expected,
        found: kind_name(found),
    }
}
