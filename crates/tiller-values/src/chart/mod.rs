//! Chart model: a named unit of default values with nested dependency charts.

mod loader;

use crate::Values;
use serde::{Deserialize, Serialize};

/// Chart descriptor file name inside a chart directory.
pub const CHART_FILE: &str = "Chart.yaml";
/// Default values file name inside a chart directory.
pub const VALUES_FILE: &str = "values.yaml";
/// Directory holding dependency charts.
pub const CHARTS_DIR: &str = "charts";

/// Descriptive metadata for a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartMetadata {
    /// Chart name; also the key its values live under in a parent.
    #[serde(default)]
    pub name: String,
    /// Chart version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A chart with its own default values and ordered dependencies.
///
/// Coalescing only borrows charts; nothing in this crate mutates one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chart {
    /// Chart metadata.
    pub metadata: ChartMetadata,
    /// Default values shipped with the chart.
    pub values: Values,
    /// Dependency charts in declaration order.
    pub dependencies: Vec<Chart>,
}

impl Chart {
    /// Create an empty chart with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ChartMetadata {
                name: name.into(),
                ..ChartMetadata::default()
            },
            ..Self::default()
        }
    }

    /// Chart name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Replace the chart's default values.
    pub fn with_values(mut self, values: Values) -> Self {
        self.values = values;
        self
    }

    /// Append a dependency chart.
    pub fn with_dependency(mut self, chart: Chart) -> Self {
        self.add_dependency(chart);
        self
    }

    /// Append a dependency chart in place.
    pub fn add_dependency(&mut self, chart: Chart) {
        self.dependencies.push(chart);
    }
}
