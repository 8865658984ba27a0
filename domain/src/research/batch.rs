//! Batch job entities
//!
//! A batch is an ordered list of [`JobSpec`]s resolved one at a time into
//! exactly one [`JobOutcome`] each.

use crate::research::composite::CompositeResult;
use crate::research::request::ResearchRequest;
use serde::{Deserialize, Serialize};

/// One independent unit of batch work. Immutable once enqueued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    request: ResearchRequest,
    display_key: String,
}

impl JobSpec {
    /// Create a job keyed by the request's gene symbol
    pub fn new(request: ResearchRequest) -> Self {
        let display_key = request.gene_symbol.clone();
        Self {
            request,
            display_key,
        }
    }

    pub fn with_display_key(request: ResearchRequest, display_key: impl Into<String>) -> Self {
        Self {
            request,
            display_key: display_key.into(),
        }
    }

    pub fn request(&self) -> &ResearchRequest {
        &self.request
    }

    pub fn display_key(&self) -> &str {
        &self.display_key
    }
}

/// Structured kind of a failed tool call.
///
/// Kept alongside the human-readable reason so a failed job can still be
/// traced back to the layer that produced the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Timeout,
    Protocol,
    RemoteTool,
    Validation,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Timeout => "timeout",
            FailureKind::Protocol => "protocol",
            FailureKind::RemoteTool => "remote_tool",
            FailureKind::Validation => "validation",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolution of one batch job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobOutcome {
    Success {
        key: String,
        result: CompositeResult,
    },
    Failure {
        key: String,
        reason: String,
        kind: FailureKind,
    },
}

impl JobOutcome {
    pub fn key(&self) -> &str {
        match self {
            JobOutcome::Success { key, .. } | JobOutcome::Failure { key, .. } => key,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, JobOutcome::Success { .. })
    }

    pub fn result(&self) -> Option<&CompositeResult> {
        match self {
            JobOutcome::Success { result, .. } => Some(result),
            JobOutcome::Failure { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            JobOutcome::Failure { reason, .. } => Some(reason),
            JobOutcome::Success { .. } => None,
        }
    }
}

/// Success/failure tally of a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[JobOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ToolResult;
    use serde_json::json;

    fn success(key: &str) -> JobOutcome {
        JobOutcome::Success {
            key: key.to_string(),
            result: CompositeResult::new(ToolResult::new(json!({}))),
        }
    }

    fn failure(key: &str) -> JobOutcome {
        JobOutcome::Failure {
            key: key.to_string(),
            reason: "Request timeout".to_string(),
            kind: FailureKind::Timeout,
        }
    }

    #[test]
    fn test_job_spec_defaults_key_to_gene_symbol() {
        let job = JobSpec::new(ResearchRequest::new("talB", "Escherichia coli"));
        assert_eq!(job.display_key(), "talB");

        let job = JobSpec::with_display_key(
            ResearchRequest::new("talB", "Escherichia coli"),
            "talB (E. coli)",
        );
        assert_eq!(job.display_key(), "talB (E. coli)");
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = success("talB");
        assert!(ok.is_success());
        assert_eq!(ok.key(), "talB");
        assert!(ok.result().is_some());
        assert!(ok.reason().is_none());

        let err = failure("lysC");
        assert!(!err.is_success());
        assert_eq!(err.key(), "lysC");
        assert_eq!(err.reason(), Some("Request timeout"));
    }

    #[test]
    fn test_summary() {
        let outcomes = vec![success("a"), failure("b"), success("c")];
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_succeeded());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(failure("thrB")).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["kind"], "timeout");
        assert_eq!(json["key"], "thrB");
    }
}
