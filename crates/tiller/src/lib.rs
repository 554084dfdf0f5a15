//! Public surface for Tiller.
//!
//! This crate re-exports the values and schema crates and provides a small
//! initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use tiller_schema as schema;
/// Re-export for convenience.
pub use tiller_values as values;

pub use tiller_schema::{Schema, SchemaError, SchemaType, create_schema_from_values, infer_schema};
pub use tiller_values::{
    Chart, CoalesceOptions, Values, ValuesError, coalesce_tables, coalesce_values, read_values,
};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
    log::debug!("tiller logging initialized");
}
