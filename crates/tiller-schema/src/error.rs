//! Error types for schema reading.

use thiserror::Error;

/// Errors returned while reading a declared schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Reading a schema file failed.
    #[error("failed to read schema: {0}")]
    Io(#[from] std::io::Error),
    /// Parsing schema text failed.
    #[error("failed to parse schema: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Converting the parsed document into a schema failed.
    #[error("failed to decode schema: {0}")]
    Decode(#[from] serde_json::Error),
    /// A schema field had the wrong shape.
    #[error("invalid schema at {path}: expected {expected}")]
    TypeMismatch { path: String, expected: &'static str },
}
