//! Literal documents used across test suites.

use tiller_values::{Values, read_values};

/// A small poem with sequences and nested tables.
pub const COLERIDGE: &str = r#"# Test YAML parse
poet: "Coleridge"
title: "Rime of the Ancient Mariner"
stanza:
  - "at"
  - "length"
  - "did"
  - cross
  - an
  - Albatross

mariner:
  with: "crossbow"
  shot: "ALBATROSS"

water:
  water:
    where: "everywhere"
    nor: "any drop to drink"
"#;

/// Chapters nested two levels deep, for path lookups.
pub const MOBY_DICK: &str = r#"
title: "Moby Dick"
chapter:
  one:
    title: "Loomings"
  two:
    title: "The Carpet-Bag"
  three:
    title: "The Spouter Inn"
"#;

/// A declared schema with nested properties and ordered required keys.
pub const DECLARED_SCHEMA: &str = r#"# Test YAML parse
title: Values
type: object
properties:
    name:
        description: Service name
        type: string
    protocol:
        type: string
    port:
        description: Port
        type: integer
        minimum: 0
    image:
        description: Container Image
        type: object
        properties:
            repo:
                type: string
            tag:
                type: string
required:
    - protocol
    - port
"#;

/// Values used as the example input for schema inference.
pub const SCHEMA_SOURCE_VALUES: &str = r#"firstname: John
lastname: Doe
age: 25
address:
  city: Springfield
  street: main
  number: 12345
phonenumbers:
  - "(888) 888-8888"
  - "(123) 456-7890"
  - "(555) 555-5555"
blah:
  - foo: 123
    bar: "bar"
    baz:
    - baz1
    - baz2
"#;

/// Parse a YAML literal, panicking on malformed fixtures.
pub fn values(yaml: &str) -> Values {
    read_values(yaml).expect("fixture values")
}
