//! Composite research result accessors

use crate::tool::ToolResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of the composite `gene-research` tool.
///
/// The payload is kept as-is; the accessors below read the handful of fields
/// the client reports on. Every accessor tolerates a missing or mistyped
/// field and returns `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeResult(ToolResult);

impl CompositeResult {
    pub fn new(result: ToolResult) -> Self {
        Self(result)
    }

    /// Final report text: `report.content`, falling back to `finalReport`.
    pub fn report_content(&self) -> Option<&str> {
        self.0
            .get("report")
            .and_then(|r| r.get("content"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .or_else(|| self.0.get_str("finalReport").filter(|s| !s.is_empty()))
    }

    /// `qualityMetrics.overallQuality`, in `[0, 1]`.
    pub fn overall_quality(&self) -> Option<f64> {
        self.0
            .get("qualityMetrics")
            .and_then(|m| m.get("overallQuality"))
            .and_then(Value::as_f64)
    }

    /// `metadata.completeness`, in `[0, 1]`.
    pub fn completeness(&self) -> Option<f64> {
        self.metadata_f64("completeness")
    }

    /// `metadata.confidence`, in `[0, 1]`.
    pub fn confidence(&self) -> Option<f64> {
        self.metadata_f64("confidence")
    }

    /// `metadata.dataSources`, skipping non-string entries.
    pub fn data_sources(&self) -> Vec<&str> {
        self.0
            .get("metadata")
            .and_then(|m| m.get("dataSources"))
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of top-level `sources`.
    pub fn source_count(&self) -> usize {
        self.0
            .get("sources")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Number of visualizations, top-level or under `geneResearch`.
    pub fn visualization_count(&self) -> usize {
        self.0
            .get("visualizations")
            .or_else(|| {
                self.0
                    .get("geneResearch")
                    .and_then(|g| g.get("visualizations"))
            })
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn as_tool_result(&self) -> &ToolResult {
        &self.0
    }

    pub fn as_value(&self) -> &Value {
        self.0.as_value()
    }

    fn metadata_f64(&self, key: &str) -> Option<f64> {
        self.0
            .get("metadata")
            .and_then(|m| m.get(key))
            .and_then(Value::as_f64)
    }
}

impl From<ToolResult> for CompositeResult {
    fn from(result: ToolResult) -> Self {
        Self(result)
    }
}
