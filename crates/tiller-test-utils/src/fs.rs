//! Helpers for laying out chart directories on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tiller_values::{CHART_FILE, CHARTS_DIR, VALUES_FILE};

/// Write file contents, creating parent directories if needed.
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// Write a chart directory under `parent` and return its path.
///
/// Pass a chart's own path as `parent` together with `nested = true` to
/// place the new chart under its `charts/` directory.
pub fn write_chart(parent: &Path, name: &str, values_yaml: &str, nested: bool) -> PathBuf {
    let dir = if nested {
        parent.join(CHARTS_DIR).join(name)
    } else {
        parent.join(name)
    };
    write_file(&dir.join(CHART_FILE), &format!("name: {name}\n"));
    write_file(&dir.join(VALUES_FILE), values_yaml);
    dir
}
