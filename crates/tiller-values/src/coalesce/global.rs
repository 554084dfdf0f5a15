//! Post-merge passes: shared-subtree propagation and null cleanup.

use super::merge::coalesce_tables;
use crate::Chart;
use crate::document::Table;
use log::debug;
use serde_json::Value;

/// Push resolved globals down the merged tree.
///
/// `vals` is the already-merged table for `chart`; `inherited` holds the
/// root's global and the parent's resolved global. Precedence (low -> high):
/// parent's resolved global, the chart's own global, the root's global.
pub(super) fn propagate_globals(
    chart: &Chart,
    vals: &mut Table,
    inherited: Option<(&Table, &Table)>,
    global_key: &str,
) {
    let mut resolved = match vals.remove(global_key) {
        Some(Value::Object(map)) => map,
        _ => Table::new(),
    };
    if let Some((root, parent)) = inherited {
        coalesce_tables(&mut resolved, parent);
        let mut merged = root.clone();
        coalesce_tables(&mut merged, &resolved);
        resolved = merged;
    }
    debug!(
        "resolved globals (chart={}, keys={})",
        chart.name(),
        resolved.len()
    );

    let root = inherited.map_or(&resolved, |(root, _)| root);
    for dependency in &chart.dependencies {
        if let Some(Value::Object(child)) = vals.get_mut(dependency.name()) {
            propagate_globals(dependency, child, Some((root, &resolved)), global_key);
        }
    }

    vals.insert(global_key.to_string(), Value::Object(resolved));
}

/// Remove every null-valued key from the table and all tables beneath it.
pub(super) fn strip_nulls(table: &mut Table) {
    table.retain(|_, value| !value.is_null());
    for value in table.values_mut() {
        strip_nulls_in_value(value);
    }
}

fn strip_nulls_in_value(value: &mut Value) {
    match value {
        Value::Object(map) => strip_nulls(map),
        Value::Array(items) => {
            for item in items {
                strip_nulls_in_value(item);
            }
        }
        _ => {}
    }
}
