//! Table merge primitive shared by every coalescing step.

use crate::document::Table;
use serde_json::Value;

/// Merge `src` into `dst`, with `dst` winning every conflict.
///
/// Keys missing from `dst` are copied from `src`. When both sides hold a
/// table the two are merged recursively; any other collision keeps the
/// existing `dst` value, even when the types differ.
pub fn coalesce_tables(dst: &mut Table, src: &Table) {
    for (key, src_value) in src {
        match dst.get_mut(key) {
            None => {
                dst.insert(key.clone(), src_value.clone());
            }
            Some(Value::Object(dst_map)) => {
                if let Value::Object(src_map) = src_value {
                    coalesce_tables(dst_map, src_map);
                }
            }
            Some(_) => {
                // Destination value wins.
            }
        }
    }
}
