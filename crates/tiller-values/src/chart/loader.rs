//! IO helpers for loading a chart tree from a directory.

use super::{CHART_FILE, CHARTS_DIR, Chart, ChartMetadata, VALUES_FILE};
use crate::{Values, ValuesError, read_values_file};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

impl Chart {
    /// Load a chart and its dependencies from a chart directory.
    ///
    /// `Chart.yaml` and `values.yaml` are optional. Dependencies are the
    /// immediate subdirectories of `charts/`, loaded in file-name order.
    pub fn load_dir(path: impl AsRef<Path>) -> Result<Self, ValuesError> {
        let path = path.as_ref();
        debug!("loading chart (path={})", path.display());

        let mut metadata = load_metadata(path)?;
        if metadata.name.is_empty() {
            metadata.name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        let values = load_optional_values(&path.join(VALUES_FILE))?;

        let mut dependencies = Vec::new();
        let charts_dir = path.join(CHARTS_DIR);
        if charts_dir.is_dir() {
            for entry in WalkDir::new(&charts_dir)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
            {
                let entry = entry.map_err(std::io::Error::from)?;
                if !entry.file_type().is_dir() {
                    debug!("skipping non-chart entry: {}", entry.path().display());
                    continue;
                }
                dependencies.push(Chart::load_dir(entry.path())?);
            }
        }

        debug!(
            "loaded chart (name={}, dependencies={})",
            metadata.name,
            dependencies.len()
        );
        Ok(Chart {
            metadata,
            values,
            dependencies,
        })
    }
}

/// Read `Chart.yaml` if present; missing or empty files yield default metadata.
fn load_metadata(chart_dir: &Path) -> Result<ChartMetadata, ValuesError> {
    let path = chart_dir.join(CHART_FILE);
    if !path.exists() {
        debug!("chart descriptor missing (path={})", path.display());
        return Ok(ChartMetadata::default());
    }
    let contents = fs::read_to_string(&path)?;
    if contents.trim().is_empty() {
        return Ok(ChartMetadata::default());
    }
    Ok(serde_yaml::from_str(&contents)?)
}

/// Read a values file if present.
fn load_optional_values(path: &Path) -> Result<Values, ValuesError> {
    if !path.exists() {
        debug!("optional values missing (path={})", path.display());
        return Ok(Values::new());
    }
    read_values_file(path)
}
