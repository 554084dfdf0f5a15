//! Schema model.

use crate::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Structural type of a schema node.
///
/// Serialized as its text form: `object`, `string`, `list[string]`, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SchemaType {
    Object,
    String,
    Number,
    Integer,
    Boolean,
    /// A sequence; `None` when elements are unconstrained.
    List(Option<Box<SchemaType>>),
    /// Any declared type name not listed above.
    Other(String),
}

impl SchemaType {
    /// Sequence of the given element type.
    pub fn list_of(element: SchemaType) -> Self {
        SchemaType::List(Some(Box::new(element)))
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Object => f.write_str("object"),
            SchemaType::String => f.write_str("string"),
            SchemaType::Number => f.write_str("number"),
            SchemaType::Integer => f.write_str("integer"),
            SchemaType::Boolean => f.write_str("boolean"),
            SchemaType::List(None) => f.write_str("list"),
            SchemaType::List(Some(element)) => write!(f, "list[{element}]"),
            SchemaType::Other(name) => f.write_str(name),
        }
    }
}

impl FromStr for SchemaType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s {
            "object" => SchemaType::Object,
            "string" => SchemaType::String,
            "number" => SchemaType::Number,
            "integer" => SchemaType::Integer,
            "boolean" => SchemaType::Boolean,
            "list" => SchemaType::List(None),
            other => match other
                .strip_prefix("list[")
                .and_then(|rest| rest.strip_suffix(']'))
            {
                Some(inner) => SchemaType::list_of(inner.parse()?),
                None => SchemaType::Other(other.to_string()),
            },
        };
        Ok(parsed)
    }
}

impl From<String> for SchemaType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(parsed) => parsed,
            Err(never) => match never {},
        }
    }
}

impl From<SchemaType> for String {
    fn from(value: SchemaType) -> Self {
        value.to_string()
    }
}

/// A schema node mirroring the shape of a values document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Title; normally only set on the root.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Node type; absent when unknown.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Child schemas for `object` and `list[object]` nodes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    /// Required property names, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
}

impl Schema {
    /// A schema with only a type set.
    pub fn typed(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// Serialize the schema as YAML.
    pub fn to_yaml(&self) -> Result<String, SchemaError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize the schema as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
