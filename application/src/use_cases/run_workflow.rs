//! Run Workflow use case
//!
//! Drives the step-by-step research workflow through four dependent tool
//! calls:
//!
//! | Stage | Tool | Consumes |
//! |-------|------|----------|
//! | 1. Plan | `write-research-plan` | query, language |
//! | 2. Query generation | `generate-SERP-query` | plan text |
//! | 3. Search execution | `search-task` | generated tasks |
//! | 4. Report synthesis | `write-final-report` | plan text + completed tasks |
//!
//! Each stage starts only after the previous stage's result is available.
//! The first failing stage aborts the run and its error is returned as-is;
//! no partial result is produced.

use crate::config::ResearchParams;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::tool_gateway::{ToolCallError, ToolGateway};
use crate::use_cases::shared::arguments;
use research_domain::research::count_sources;
use research_domain::util::truncate_str;
use research_domain::{
    DomainError, ResearchQuery, ToolArguments, ToolResult, WorkflowResult, WorkflowStage,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Field of the stage 1 result holding the plan text.
const REPORT_PLAN_FIELD: &str = "reportPlan";

/// Input for the [`RunWorkflowUseCase`].
#[derive(Debug, Clone)]
pub struct RunWorkflowInput {
    /// Free-text research topic.
    pub query: String,
    /// Report language tag.
    pub language: String,
    /// Maximum number of search results per task.
    pub max_result: u32,
    /// Include content-related images in the final report (stage 4).
    pub enable_citation_image: bool,
    /// Include citation links in search results and the report (stages 3 and 4).
    pub enable_references: bool,
}

impl RunWorkflowInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self::from_params(query, &ResearchParams::default())
    }

    /// Build an input inheriting language, result limit and flags from `params`.
    pub fn from_params(query: impl Into<String>, params: &ResearchParams) -> Self {
        Self {
            query: query.into(),
            language: params.language.clone(),
            max_result: params.max_result,
            enable_citation_image: params.enable_citation_image,
            enable_references: params.enable_references,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_max_result(mut self, max_result: u32) -> Self {
        self.max_result = max_result;
        self
    }
}

/// Use case for running the four-stage workflow.
#[derive(Clone)]
pub struct RunWorkflowUseCase {
    gateway: Arc<dyn ToolGateway>,
}

impl RunWorkflowUseCase {
    pub fn new(gateway: Arc<dyn ToolGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunWorkflowInput) -> Result<WorkflowResult, ToolCallError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunWorkflowInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<WorkflowResult, ToolCallError> {
        let query = ResearchQuery::try_new(input.query)?;
        if input.max_result == 0 {
            return Err(DomainError::InvalidMaxResult.into());
        }
        let language = input.language;
        let max_result = input.max_result;
        let enable_references = input.enable_references;
        let enable_citation_image = input.enable_citation_image;

        info!("Starting workflow: {}", truncate_str(query.content(), 100));

        // Stage 1: Plan
        let plan_result = self
            .run_stage(
                WorkflowStage::Plan,
                arguments(json!({
                    "query": query.content(),
                    "language": language,
                })),
                progress,
            )
            .await?;
        let plan = match plan_result.get_str(REPORT_PLAN_FIELD) {
            Some(plan) => plan.to_string(),
            None => {
                let error = ToolCallError::protocol(format!(
                    "{} result is missing '{}'",
                    WorkflowStage::Plan.tool_name(),
                    REPORT_PLAN_FIELD
                ));
                progress.on_stage_failed(WorkflowStage::Plan, &error);
                return Err(error);
            }
        };
        progress.on_stage_complete(WorkflowStage::Plan, plan.chars().count());

        // Stage 2: Query generation
        let search_tasks = self
            .run_stage(
                WorkflowStage::QueryGeneration,
                arguments(json!({
                    "plan": plan,
                    "language": language,
                })),
                progress,
            )
            .await?;
        progress.on_stage_complete(
            WorkflowStage::QueryGeneration,
            search_tasks.array_len().unwrap_or(0),
        );

        // Stage 3: Search execution
        let completed_tasks = self
            .run_stage(
                WorkflowStage::SearchExecution,
                arguments(json!({
                    "tasks": search_tasks.into_value(),
                    "language": language,
                    "maxResult": max_result,
                    "enableReferences": enable_references,
                })),
                progress,
            )
            .await?;
        progress.on_stage_complete(
            WorkflowStage::SearchExecution,
            count_sources(&completed_tasks),
        );

        // Stage 4: Report synthesis
        let report = self
            .run_stage(
                WorkflowStage::ReportSynthesis,
                arguments(json!({
                    "plan": plan,
                    "tasks": completed_tasks.as_value(),
                    "language": language,
                    "maxResult": max_result,
                    "enableCitationImage": enable_citation_image,
                    "enableReferences": enable_references,
                })),
                progress,
            )
            .await?;

        let result = WorkflowResult {
            plan,
            tasks: completed_tasks,
            report,
        };
        progress.on_stage_complete(
            WorkflowStage::ReportSynthesis,
            result.report_text().map_or(0, |r| r.chars().count()),
        );

        info!(
            "Workflow complete: {} sources collected",
            result.source_count()
        );
        Ok(result)
    }

    /// Issue one stage's tool call, reporting failure before propagating it.
    async fn run_stage(
        &self,
        stage: WorkflowStage,
        args: ToolArguments,
        progress: &dyn ProgressNotifier,
    ) -> Result<ToolResult, ToolCallError> {
        debug!("Stage {} ({}) starting", stage.number(), stage.tool_name());
        progress.on_stage_start(stage);

        self.gateway
            .invoke(stage.tool_name(), args)
            .await
            .inspect_err(|e| {
                warn!("Stage {} ({}) failed: {}", stage.number(), stage, e);
                progress.on_stage_failed(stage, e);
            })
    }
}
