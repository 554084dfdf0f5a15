//! Structural schemas for values documents.
//!
//! Schemas can be read as declared in a schema file, or inferred from an
//! example values document.

mod error;
mod infer;
mod model;
mod read;

/// Public error type returned by schema reading APIs.
pub use error::SchemaError;
/// Schema inference from example documents.
pub use infer::{VALUES_TITLE, create_schema_from_values, infer_schema};
/// Schema model types.
pub use model::{Schema, SchemaType};
/// Declared schema reading.
pub use read::{read_schema, read_schema_file};
