//! Step-by-step research workflow entities

use crate::tool::{ToolResult, names};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stage of the four-stage workflow.
///
/// Stages always run in declaration order; there is no branching or skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    Plan,
    QueryGeneration,
    SearchExecution,
    ReportSynthesis,
}

impl WorkflowStage {
    pub const ALL: [WorkflowStage; 4] = [
        WorkflowStage::Plan,
        WorkflowStage::QueryGeneration,
        WorkflowStage::SearchExecution,
        WorkflowStage::ReportSynthesis,
    ];

    /// Remote tool invoked by this stage
    pub fn tool_name(&self) -> &'static str {
        match self {
            WorkflowStage::Plan => names::WRITE_RESEARCH_PLAN,
            WorkflowStage::QueryGeneration => names::GENERATE_SERP_QUERY,
            WorkflowStage::SearchExecution => names::SEARCH_TASK,
            WorkflowStage::ReportSynthesis => names::WRITE_FINAL_REPORT,
        }
    }

    /// 1-based position in the workflow
    pub fn number(&self) -> usize {
        match self {
            WorkflowStage::Plan => 1,
            WorkflowStage::QueryGeneration => 2,
            WorkflowStage::SearchExecution => 3,
            WorkflowStage::ReportSynthesis => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::Plan => "plan",
            WorkflowStage::QueryGeneration => "query_generation",
            WorkflowStage::SearchExecution => "search_execution",
            WorkflowStage::ReportSynthesis => "report_synthesis",
        }
    }
}

impl std::fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of a completed workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResult {
    /// Plan text produced by stage 1.
    pub plan: String,
    /// Completed search tasks produced by stage 3.
    pub tasks: ToolResult,
    /// Final report produced by stage 4.
    pub report: ToolResult,
}

impl WorkflowResult {
    /// Total number of `sources` collected across completed tasks.
    pub fn source_count(&self) -> usize {
        count_sources(&self.tasks)
    }

    /// Report text, whether the tool returned a bare string or a
    /// `{ "finalReport": ... }` object.
    pub fn report_text(&self) -> Option<&str> {
        self.report
            .as_value()
            .as_str()
            .or_else(|| self.report.get_str("finalReport"))
    }
}

/// Sum the lengths of each task's `sources` array.
pub fn count_sources(tasks: &ToolResult) -> usize {
    tasks
        .as_value()
        .as_array()
        .map(|tasks| {
            tasks
                .iter()
                .filter_map(|t| t.get("sources").and_then(Value::as_array))
                .map(Vec::len)
                .sum()
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stage_order_and_tools() {
        let tools: Vec<_> = WorkflowStage::ALL.iter().map(|s| s.tool_name()).collect();
        assert_eq!(
            tools,
            vec![
                "write-research-plan",
                "generate-SERP-query",
                "search-task",
                "write-final-report"
            ]
        );
        let numbers: Vec<_> = WorkflowStage::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_source_count() {
        let result = WorkflowResult {
            plan: "plan".to_string(),
            tasks: ToolResult::new(json!([
                {"query": "a", "sources": [{"url": "x"}, {"url": "y"}]},
                {"query": "b"},
                {"query": "c", "sources": [{"url": "z"}]}
            ])),
            report: ToolResult::new(json!({"finalReport": "# Report"})),
        };
        assert_eq!(result.source_count(), 3);
        assert_eq!(result.report_text(), Some("# Report"));
    }

    #[test]
    fn test_report_text_bare_string() {
        let result = WorkflowResult {
            plan: String::new(),
            tasks: ToolResult::new(json!([])),
            report: ToolResult::new(json!("plain report")),
        };
        assert_eq!(result.report_text(), Some("plain report"));
        assert_eq!(result.source_count(), 0);
    }
}
