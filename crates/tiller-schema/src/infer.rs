//! Schema inference from example values.

use crate::{Schema, SchemaType};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tiller_values::Values;

/// Title given to schemas inferred from a root values document.
pub const VALUES_TITLE: &str = "Values";

/// Infer a schema from a root values document, titled [`VALUES_TITLE`].
pub fn create_schema_from_values(values: &Values) -> Schema {
    let mut schema = infer_table(values.as_table());
    schema.title = VALUES_TITLE.to_string();
    schema
}

/// Infer a schema describing the shape of `value`.
///
/// Integers and floats both infer as `number`. Null infers as a schema with
/// no type. The returned schema has no title.
pub fn infer_schema(value: &Value) -> Schema {
    match value {
        Value::Object(map) => infer_table(map),
        Value::Array(items) => infer_sequence(items),
        Value::String(_) => Schema::typed(SchemaType::String),
        Value::Number(_) => Schema::typed(SchemaType::Number),
        Value::Bool(_) => Schema::typed(SchemaType::Boolean),
        Value::Null => Schema::default(),
    }
}

fn infer_table(map: &Map<String, Value>) -> Schema {
    Schema {
        schema_type: Some(SchemaType::Object),
        properties: map
            .iter()
            .map(|(key, value)| (key.clone(), infer_schema(value)))
            .collect(),
        ..Schema::default()
    }
}

/// Sequences of tables become `list[object]` with the union of element
/// properties; a repeated key takes the inference of the last element that
/// has it. Otherwise the element type is kept only when every non-null
/// element agrees on it, and nested sequences carry the same last-wins union
/// of their elements' properties.
fn infer_sequence(items: &[Value]) -> Schema {
    let mut tables = items.iter().filter_map(Value::as_object).peekable();
    if tables.peek().is_some() {
        let properties = tables.fold(BTreeMap::new(), |mut properties, table| {
            for (key, value) in table {
                properties.insert(key.clone(), infer_schema(value));
            }
            properties
        });
        return Schema {
            schema_type: Some(SchemaType::list_of(SchemaType::Object)),
            properties,
            ..Schema::default()
        };
    }

    let elements: Vec<Schema> = items
        .iter()
        .filter(|item| !item.is_null())
        .map(infer_schema)
        .collect();
    let element_type = elements.first().and_then(|first| first.schema_type.clone());
    match element_type {
        Some(element) if elements.iter().all(|e| e.schema_type.as_ref() == Some(&element)) => {
            let properties = elements.into_iter().fold(BTreeMap::new(), |mut acc, e| {
                acc.extend(e.properties);
                acc
            });
            Schema {
                schema_type: Some(SchemaType::list_of(element)),
                properties,
                ..Schema::default()
            }
        }
        _ => Schema::typed(SchemaType::List(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn scalars_infer_their_type() {
        assert_eq!(infer_schema(&json!("x")), Schema::typed(SchemaType::String));
        assert_eq!(infer_schema(&json!(25)), Schema::typed(SchemaType::Number));
        assert_eq!(infer_schema(&json!(2.5)), Schema::typed(SchemaType::Number));
        assert_eq!(infer_schema(&json!(-3)), Schema::typed(SchemaType::Number));
        assert_eq!(infer_schema(&json!(true)), Schema::typed(SchemaType::Boolean));
        assert_eq!(infer_schema(&Value::Null), Schema::default());
    }

    #[test]
    fn scalar_sequences_infer_element_type() {
        assert_eq!(
            infer_schema(&json!(["a", "b"])).schema_type,
            Some(SchemaType::list_of(SchemaType::String))
        );
        assert_eq!(
            infer_schema(&json!([1, 2.5, null])).schema_type,
            Some(SchemaType::list_of(SchemaType::Number))
        );
        assert_eq!(
            infer_schema(&json!([[true], [false]])).schema_type,
            Some(SchemaType::list_of(SchemaType::list_of(SchemaType::Boolean)))
        );
    }

    #[test]
    fn empty_and_mixed_sequences_are_unconstrained() {
        for value in [json!([]), json!([null]), json!(["a", 1])] {
            assert_eq!(
                infer_schema(&value),
                Schema::typed(SchemaType::List(None)),
                "value {value}"
            );
        }
    }

    #[test]
    fn heterogeneous_object_sequence_unions_properties() {
        let schema = infer_schema(&json!([
            { "foo": 123, "bar": "x" },
            { "baz": ["y"] }
        ]));

        assert_eq!(
            schema.schema_type,
            Some(SchemaType::list_of(SchemaType::Object))
        );
        let expected: BTreeMap<String, Schema> = [
            ("foo", Schema::typed(SchemaType::Number)),
            ("bar", Schema::typed(SchemaType::String)),
            ("baz", Schema::typed(SchemaType::list_of(SchemaType::String))),
        ]
        .into_iter()
        .map(|(key, schema)| (key.to_string(), schema))
        .collect();
        assert_eq!(schema.properties, expected);
    }

    #[test]
    fn last_element_wins_on_conflicting_key_types() {
        let schema = infer_schema(&json!([
            { "port": 80 },
            { "port": "http" },
            { "other": true }
        ]));
        assert_eq!(
            schema.properties.get("port"),
            Some(&Schema::typed(SchemaType::String))
        );

        let reversed = infer_schema(&json!([{ "port": "http" }, { "port": 80 }]));
        assert_eq!(
            reversed.properties.get("port"),
            Some(&Schema::typed(SchemaType::Number))
        );
    }

    #[test]
    fn scalars_mixed_with_tables_are_ignored() {
        let schema = infer_schema(&json!(["loose", { "name": "a" }]));
        assert_eq!(
            schema.schema_type,
            Some(SchemaType::list_of(SchemaType::Object))
        );
        assert_eq!(schema.properties.len(), 1);
    }

    #[test]
    fn nested_sequences_of_tables_keep_inner_properties() {
        let schema = infer_schema(&json!([[{ "a": 1 }], [{ "b": "x" }]]));

        assert_eq!(
            schema.schema_type,
            Some(SchemaType::list_of(SchemaType::list_of(SchemaType::Object)))
        );
        let expected: BTreeMap<String, Schema> = [
            ("a", Schema::typed(SchemaType::Number)),
            ("b", Schema::typed(SchemaType::String)),
        ]
        .into_iter()
        .map(|(key, schema)| (key.to_string(), schema))
        .collect();
        assert_eq!(schema.properties, expected);
    }

    #[test]
    fn inferred_schemas_have_no_title_or_required() {
        let schema = infer_schema(&json!({ "a": { "b": 1 } }));
        assert!(schema.title.is_empty());
        assert!(schema.required.is_empty());
        assert!(schema.properties["a"].required.is_empty());
    }
}
