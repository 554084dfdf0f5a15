//! Error types for values parsing, path lookup, and coalescing.

use thiserror::Error;

/// Errors returned while reading, resolving, or coalescing values.
#[derive(Debug, Error)]
pub enum ValuesError {
    /// Reading a values or chart file failed.
    #[error("failed to read values: {0}")]
    Io(#[from] std::io::Error),
    /// Parsing YAML text failed.
    #[error("failed to parse values: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A number that the document model cannot hold (`.inf`, `.nan`).
    #[error("non-finite number at {path}")]
    NonFiniteNumber { path: String },
    /// A lookup was attempted with an empty path.
    #[error("empty path")]
    EmptyPath,
    /// A path segment does not exist.
    #[error("no key {key:?} in path {path:?}")]
    NotFound { key: String, path: String },
    /// A node had a different shape than the caller required.
    #[error("invalid value at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    /// The chart tree is nested deeper than the configured limit.
    #[error("chart {chart:?} exceeds max dependency depth {max_depth}")]
    DepthExceeded { chart: String, max_depth: usize },
}
