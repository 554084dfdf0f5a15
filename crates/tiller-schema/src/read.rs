//! Reading declared schemas.
//!
//! Declared schema text is parsed, shape-checked field by field so errors
//! can name the offending path, then decoded into a [`Schema`].

use crate::{Schema, SchemaError};
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parse a declared schema from YAML (or JSON) text.
pub fn read_schema(contents: &str) -> Result<Schema, SchemaError> {
    debug!("reading schema from raw contents (len={})", contents.len());
    if contents
        .lines()
        .all(|line| line.trim().is_empty() || line.trim_start().starts_with('#'))
    {
        return Ok(Schema::default());
    }
    let value: Value = serde_yaml::from_str(contents)?;
    if value.is_null() {
        return Ok(Schema::default());
    }
    validate_schema(&value, "")?;
    Ok(serde_json::from_value(value)?)
}

/// Read and parse a declared schema file from disk.
pub fn read_schema_file(path: impl AsRef<Path>) -> Result<Schema, SchemaError> {
    info!("reading schema from path: {}", path.as_ref().display());
    let contents = fs::read_to_string(path)?;
    read_schema(&contents)
}

/// Validate a single schema node and its properties.
fn validate_schema(value: &Value, path: &str) -> Result<(), SchemaError> {
    let map = expect_object(value, path)?;

    if let Some(value) = map.get("title") {
        expect_string(value, &join_path(path, "title"))?;
    }
    if let Some(value) = map.get("type") {
        expect_string(value, &join_path(path, "type"))?;
    }
    if let Some(value) = map.get("description") {
        expect_string(value, &join_path(path, "description"))?;
    }
    if let Some(value) = map.get("minimum") {
        expect_number(value, &join_path(path, "minimum"))?;
    }
    if let Some(value) = map.get("required") {
        validate_string_array(value, &join_path(path, "required"))?;
    }
    if let Some(value) = map.get("properties") {
        let properties_path = join_path(path, "properties");
        let properties = expect_object(value, &properties_path)?;
        for (key, property) in properties {
            validate_schema(property, &join_path(&properties_path, key))?;
        }
    }
    Ok(())
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, SchemaError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(type_mismatch(path, "object")),
    }
}

/// Expect a JSON string or return a typed error.
fn expect_string(value: &Value, path: &str) -> Result<(), SchemaError> {
    if value.is_string() {
        Ok(())
    } else {
        Err(type_mismatch(path, "string"))
    }
}

/// Expect a JSON number or return a typed error.
fn expect_number(value: &Value, path: &str) -> Result<(), SchemaError> {
    if value.is_number() {
        Ok(())
    } else {
        Err(type_mismatch(path, "number"))
    }
}

/// Validate that a value is an array of strings.
fn validate_string_array(value: &Value, path: &str) -> Result<(), SchemaError> {
    let Value::Array(arr) = value else {
        return Err(type_mismatch(path, "array"));
    };
    for (idx, entry) in arr.iter().enumerate() {
        if !entry.is_string() {
            return Err(type_mismatch(&format!("{path}[{idx}]"), "string"));
        }
    }
    Ok(())
}

/// Join nested paths for better error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn type_mismatch(path: &str, expected: &'static str) -> SchemaError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    SchemaError::TypeMismatch {
        path: normalized_path.to_string(),
        expected,
    }
}
