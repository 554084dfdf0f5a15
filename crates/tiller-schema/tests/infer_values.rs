//! Schema inference tests over parsed values.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use tiller_schema::{Schema, SchemaType, VALUES_TITLE, create_schema_from_values, infer_schema};
use tiller_test_utils::{SCHEMA_SOURCE_VALUES, values};

fn object(properties: Vec<(&str, Schema)>) -> Schema {
    Schema {
        schema_type: Some(SchemaType::Object),
        properties: properties
            .into_iter()
            .map(|(key, schema)| (key.to_string(), schema))
            .collect::<BTreeMap<_, _>>(),
        ..Schema::default()
    }
}

#[test]
fn creates_schema_from_values() {
    let schema = create_schema_from_values(&values(SCHEMA_SOURCE_VALUES));

    let mut blah = object(vec![
        ("bar", Schema::typed(SchemaType::String)),
        ("baz", Schema::typed(SchemaType::list_of(SchemaType::String))),
        ("foo", Schema::typed(SchemaType::Number)),
    ]);
    blah.schema_type = Some(SchemaType::list_of(SchemaType::Object));

    let mut expected = object(vec![
        (
            "address",
            object(vec![
                ("city", Schema::typed(SchemaType::String)),
                ("number", Schema::typed(SchemaType::Number)),
                ("street", Schema::typed(SchemaType::String)),
            ]),
        ),
        ("age", Schema::typed(SchemaType::Number)),
        ("blah", blah),
        ("firstname", Schema::typed(SchemaType::String)),
        ("lastname", Schema::typed(SchemaType::String)),
        (
            "phonenumbers",
            Schema::typed(SchemaType::list_of(SchemaType::String)),
        ),
    ]);
    expected.title = VALUES_TITLE.to_string();

    assert_eq!(schema, expected);
}

#[test]
fn infer_schema_leaves_title_empty() {
    let doc = values("firstname: John\nage: 25\nphonenumbers: [a, b]\n");
    let schema = infer_schema(&doc.into());

    assert_eq!(
        schema,
        object(vec![
            ("firstname", Schema::typed(SchemaType::String)),
            ("age", Schema::typed(SchemaType::Number)),
            (
                "phonenumbers",
                Schema::typed(SchemaType::list_of(SchemaType::String)),
            ),
        ])
    );
}

#[test]
fn null_values_infer_untyped() {
    let schema = infer_schema(&values("missing: ~\n").into());
    assert_eq!(schema.properties["missing"], Schema::default());
}

#[test]
fn inferred_schema_serializes_type_names() {
    let schema = infer_schema(&values("tags: [a, b]\n").into());
    let json: serde_json::Value =
        serde_json::from_str(&schema.to_json().expect("json")).expect("parse");
    assert_eq!(json["properties"]["tags"]["type"], "list[string]");
}
