//! Chart-tree coalescing.
//!
//! Merges caller overrides over each chart's default values, recursing into
//! dependency charts, then propagates the shared `global` table and finally
//! drops null tombstones.

mod global;
mod merge;


pub use merge::coalesce_tables;

use crate::document::Table;
use crate::{Chart, Values, ValuesError};
use log::{debug, info};
use serde_json::Value;

/// Reserved key whose table is shared with every chart in the tree.
pub const GLOBAL_KEY: &str = "global";
/// Default limit on dependency nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling chart-tree coalescing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoalesceOptions {
    /// Key of the shared table propagated into every chart.
    pub global_key: String,
    /// Maximum dependency depth before coalescing gives up.
    pub max_depth: usize,
}

impl Default for CoalesceOptions {
    fn default() -> Self {
        Self {
            global_key: GLOBAL_KEY.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CoalesceOptions {
    /// Use a different key for the shared table.
    pub fn with_global_key(mut self, key: impl Into<String>) -> Self {
        self.global_key = key.into();
        self
    }

    /// Change the dependency depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Coalesce overrides with a chart tree using default options.
///
/// The result holds the root chart's merged values; each dependency's values
/// live under its chart name, recursively.
pub fn coalesce_values(chart: &Chart, overrides: &Values) -> Result<Values, ValuesError> {
    coalesce_values_with_options(chart, overrides, &CoalesceOptions::default())
}

/// Coalesce overrides with a chart tree.
///
/// Precedence (low -> high): chart defaults, parent chart defaults, caller
/// overrides. Globals are resolved top-down with ancestors winning.
pub fn coalesce_values_with_options(
    chart: &Chart,
    overrides: &Values,
    options: &CoalesceOptions,
) -> Result<Values, ValuesError> {
    info!("coalescing values (chart={})", chart.name());
    let mut merged = coalesce_chart(chart, overrides.as_table().clone(), options, 0)?;
    global::propagate_globals(chart, &mut merged, None, &options.global_key);
    global::strip_nulls(&mut merged);
    Ok(Values::from(merged))
}

/// Merge one chart's defaults under `vals`, then recurse into dependencies.
fn coalesce_chart(
    chart: &Chart,
    mut vals: Table,
    options: &CoalesceOptions,
    depth: usize,
) -> Result<Table, ValuesError> {
    if depth > options.max_depth {
        return Err(ValuesError::DepthExceeded {
            chart: chart.name().to_string(),
            max_depth: options.max_depth,
        });
    }
    debug!("coalescing chart (name={}, depth={})", chart.name(), depth);

    coalesce_tables(&mut vals, chart.values.as_table());

    for dependency in &chart.dependencies {
        let name = dependency.name();
        let sub = match vals.remove(name) {
            Some(Value::Object(map)) => map,
            _ => Table::new(),
        };
        let merged = coalesce_chart(dependency, sub, options, depth + 1)?;
        vals.insert(name.to_string(), Value::Object(merged));
    }
    Ok(vals)
}
