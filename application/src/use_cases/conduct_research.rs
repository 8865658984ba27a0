//! Conduct Research use case
//!
//! Runs the composite research path: one `gene-research` call that
//! performs the whole plan → search → report pipeline server-side.
//!
//! Preferred over [`RunWorkflowUseCase`](super::run_workflow::RunWorkflowUseCase)
//! when only the final result matters, because a single round trip has a
//! single failure point.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::report_store::ReportStore;
use crate::ports::tool_gateway::{ToolCallError, ToolGateway};
use research_domain::tool::names::GENE_RESEARCH;
use research_domain::{CompositeResult, ResearchRequest};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Use case for a single composite research call.
///
/// When a [`ReportStore`] is attached, successful results are persisted
/// after the call returns. Persistence is best-effort and never turns a
/// successful call into a failure.
#[derive(Clone)]
pub struct ConductResearchUseCase {
    gateway: Arc<dyn ToolGateway>,
    report_store: Option<Arc<dyn ReportStore>>,
    save_data: bool,
}

impl ConductResearchUseCase {
    pub fn new(gateway: Arc<dyn ToolGateway>) -> Self {
        Self {
            gateway,
            report_store: None,
            save_data: false,
        }
    }

    /// Persist report text (and the full result when `save_data`) after success.
    pub fn with_report_store(mut self, store: Arc<dyn ReportStore>, save_data: bool) -> Self {
        self.report_store = Some(store);
        self.save_data = save_data;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: &ResearchRequest,
    ) -> Result<CompositeResult, ToolCallError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: &ResearchRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<CompositeResult, ToolCallError> {
        request.validate()?;

        info!(
            "Starting composite research: {} in {}",
            request.gene_symbol, request.organism
        );
        progress.on_research_start(request);

        let start = Instant::now();
        match self
            .gateway
            .invoke(GENE_RESEARCH, request.to_arguments())
            .await
        {
            Ok(result) => {
                let result = CompositeResult::new(result);
                let elapsed = start.elapsed();
                info!(
                    "Research for {} completed in {:.2}s",
                    request.gene_symbol,
                    elapsed.as_secs_f64()
                );
                progress.on_research_complete(&result, elapsed);
                self.persist(request, &result, progress);
                Ok(result)
            }
            Err(e) => {
                warn!("Research for {} failed: {}", request.gene_symbol, e);
                progress.on_research_failed(&e);
                Err(e)
            }
        }
    }

    fn persist(
        &self,
        request: &ResearchRequest,
        result: &CompositeResult,
        progress: &dyn ProgressNotifier,
    ) {
        let Some(store) = &self.report_store else {
            return;
        };

        match result.report_content() {
            Some(content) => {
                match store.save_report(&request.gene_symbol, &request.organism, content) {
                    Ok(path) => {
                        debug!("Report saved to {}", path.display());
                        progress.on_artifact_saved(&path);
                    }
                    Err(e) => warn!("Could not save report for {}: {}", request.gene_symbol, e),
                }
            }
            None => warn!(
                "No report content available to save for {}",
                request.gene_symbol
            ),
        }

        if self.save_data {
            match store.save_data(&request.gene_symbol, &request.organism, result.as_value()) {
                Ok(path) => {
                    debug!("Research data saved to {}", path.display());
                    progress.on_artifact_saved(&path);
                }
                Err(e) => warn!(
                    "Could not save research data for {}: {}",
                    request.gene_symbol, e
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::shared::testing::{MemoryReportStore, MockGateway};
    use research_domain::{DomainError, ToolResult};
    use serde_json::json;

    fn request() -> ResearchRequest {
        ResearchRequest::new("talB", "Escherichia coli")
            .with_focus(["molecular_function", "metabolic_pathways"])
    }

    #[tokio::test]
    async fn test_invokes_composite_tool_once() {
        let payload = json!({"report": {"content": "# talB"}, "metadata": {"confidence": 0.8}});
        let gateway = Arc::new(MockGateway::new(vec![Ok(ToolResult::new(payload.clone()))]));
        let use_case = ConductResearchUseCase::new(gateway.clone());

        let result = use_case.execute(&request()).await.unwrap();

        assert_eq!(result.as_value(), &payload);
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "gene-research");
        assert_eq!(calls[0].1["geneSymbol"], "talB");
        assert_eq!(
            calls[0].1["researchFocus"],
            json!(["molecular_function", "metabolic_pathways"])
        );
    }

    #[tokio::test]
    async fn test_error_propagates_unchanged() {
        let gateway = Arc::new(MockGateway::new(vec![Err(ToolCallError::remote(
            "-32000", "boom",
        ))]));
        let use_case = ConductResearchUseCase::new(gateway);

        let err = use_case.execute(&request()).await.unwrap_err();
        assert_eq!(err, ToolCallError::remote("-32000", "boom"));
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let use_case = ConductResearchUseCase::new(gateway.clone());

        let err = use_case
            .execute(&ResearchRequest::new("", "Escherichia coli"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ToolCallError::Validation(DomainError::InvalidRequest(_))
        ));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_persists_report_and_data() {
        let payload = json!({"finalReport": "# talB report"});
        let gateway = Arc::new(MockGateway::new(vec![Ok(ToolResult::new(payload.clone()))]));
        let store = Arc::new(MemoryReportStore::default());
        let use_case = ConductResearchUseCase::new(gateway).with_report_store(store.clone(), true);

        use_case.execute(&request()).await.unwrap();

        let reports = store.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, "talB");
        assert_eq!(reports[0].1, "Escherichia coli");
        assert_eq!(reports[0].2, "# talB report");
        let data = store.data.lock().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].2, payload);
    }

    #[tokio::test]
    async fn test_skips_report_without_content() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(ToolResult::new(json!({})))]));
        let store = Arc::new(MemoryReportStore::default());
        let use_case = ConductResearchUseCase::new(gateway).with_report_store(store.clone(), false);

        use_case.execute(&request()).await.unwrap();

        assert!(store.reports.lock().unwrap().is_empty());
        assert!(store.data.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_does_not_fail_research() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(ToolResult::new(
            json!({"finalReport": "# x"}),
        ))]));
        let store = Arc::new(MemoryReportStore::failing());
        let use_case = ConductResearchUseCase::new(gateway).with_report_store(store, true);

        assert!(use_case.execute(&request()).await.is_ok());
    }
}
