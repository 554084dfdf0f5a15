//! Values documents, chart trees, and values coalescing.
//!
//! This crate owns the document model used across Tiller, dotted-path
//! lookup over it, and the override/default merge applied to a chart tree.

mod chart;
mod coalesce;
pub mod document;
mod error;
mod values;

/// Chart model and directory loader.
pub use chart::{CHART_FILE, CHARTS_DIR, Chart, ChartMetadata, VALUES_FILE};
/// Coalescing entry points and options.
pub use coalesce::{
    CoalesceOptions, DEFAULT_MAX_DEPTH, GLOBAL_KEY, coalesce_tables, coalesce_values,
    coalesce_values_with_options,
};
/// Table alias for the document model.
pub use document::Table;
/// Public error type returned by values APIs.
pub use error::ValuesError;
/// Values document and parsing helpers.
pub use values::{Values, read_values, read_values_file};
