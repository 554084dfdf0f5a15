//! Parsed values documents and dotted-path lookup.

use crate::ValuesError;
use crate::document::{Table, expect_table, type_mismatch};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// Separator between keys in a lookup path.
const PATH_SEPARATOR: char = '.';

/// A root values document. Always a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(Table);

impl Values {
    /// Create an empty values table.
    pub fn new() -> Self {
        Self(Table::new())
    }

    /// Serialize the values back to YAML text.
    pub fn to_yaml(&self) -> Result<String, ValuesError> {
        Ok(serde_yaml::to_string(&self.0)?)
    }

    /// Borrow the underlying table.
    pub fn as_table(&self) -> &Table {
        &self.0
    }

    /// Resolve a dotted path such as `chapter.one.title` to the stored value.
    pub fn path_value(&self, path: &str) -> Result<&Value, ValuesError> {
        let mut segments = split_path(path)?;
        // split_path never yields an empty list for a non-empty path.
        let first = segments.remove(0);
        let mut current = self.0.get(first).ok_or_else(|| not_found(first, path))?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment).ok_or_else(|| not_found(segment, path))?,
                _ => return Err(not_found(segment, path)),
            };
        }
        Ok(current)
    }

    /// Resolve a dotted path and require the result to be a table.
    pub fn table(&self, path: &str) -> Result<&Table, ValuesError> {
        let value = self.path_value(path)?;
        expect_table(value, path)
    }
}

impl Deref for Values {
    type Target = Table;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Values {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Table> for Values {
    fn from(table: Table) -> Self {
        Self(table)
    }
}

impl From<Values> for Value {
    fn from(values: Values) -> Self {
        Value::Object(values.0)
    }
}

impl TryFrom<Value> for Values {
    type Error = ValuesError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(type_mismatch("", "table", &other)),
        }
    }
}

/// Parse a values document from YAML text.
///
/// Empty and comment-only documents produce an empty table.
pub fn read_values(contents: &str) -> Result<Values, ValuesError> {
    debug!("reading values from raw contents (len={})", contents.len());
    if is_blank_document(contents) {
        return Ok(Values::new());
    }
    let yaml: serde_yaml::Value = serde_yaml::from_str(contents)?;
    ensure_finite(&yaml, "")?;
    let value: Value = serde_yaml::from_value(yaml)?;
    Values::try_from(value)
}

/// Reject `.inf` and `.nan`, which would otherwise decode as null.
fn ensure_finite(value: &serde_yaml::Value, path: &str) -> Result<(), ValuesError> {
    match value {
        serde_yaml::Value::Number(number) if number.is_nan() || number.is_infinite() => {
            Err(ValuesError::NonFiniteNumber {
                path: if path.is_empty() { "root" } else { path }.to_string(),
            })
        }
        serde_yaml::Value::Sequence(items) => {
            for (idx, item) in items.iter().enumerate() {
                ensure_finite(item, &format!("{path}[{idx}]"))?;
            }
            Ok(())
        }
        serde_yaml::Value::Mapping(map) => {
            for (key, item) in map {
                let key = match key {
                    serde_yaml::Value::String(key) => key.clone(),
                    other => serde_yaml::to_string(other)?.trim_end().to_string(),
                };
                ensure_finite(item, &join_path(path, &key))?;
            }
            Ok(())
        }
        serde_yaml::Value::Tagged(tagged) => ensure_finite(&tagged.value, path),
        _ => Ok(()),
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{key}")
    }
}

/// Read and parse a values file from disk.
pub fn read_values_file(path: impl AsRef<Path>) -> Result<Values, ValuesError> {
    info!("reading values from path: {}", path.as_ref().display());
    let contents = fs::read_to_string(path)?;
    read_values(&contents)
}

fn is_blank_document(contents: &str) -> bool {
    contents.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

fn split_path(path: &str) -> Result<Vec<&str>, ValuesError> {
    if path.is_empty() {
        return Err(ValuesError::EmptyPath);
    }
    Ok(path.split(PATH_SEPARATOR).collect())
}

fn not_found(key: &str, path: &str) -> ValuesError {
    ValuesError::NotFound {
        key: key.to_string(),
        path: path.to_string(),
    }
}
