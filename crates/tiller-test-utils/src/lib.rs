//! Test helpers shared across Tiller crates.

pub mod charts;
pub mod documents;
pub mod fs;

pub use charts::{MOBY_OVERRIDES, moby_chart};
pub use documents::{COLERIDGE, DECLARED_SCHEMA, MOBY_DICK, SCHEMA_SOURCE_VALUES, values};
pub use fs::{write_chart, write_file};
