//! Progress notification port
//!
//! Defines the interface for reporting progress during research execution.

use crate::ports::tool_gateway::ToolCallError;
use research_domain::{CompositeResult, JobOutcome, JobSpec, ResearchRequest, WorkflowStage};
use std::path::Path;
use std::time::Duration;

/// Callback for progress updates during research execution
///
/// Implementations live in the presentation layer and display progress in
/// various ways (progress bars, plain lines). They are observers only: no
/// use case reads anything back from them.
pub trait ProgressNotifier: Send + Sync {
    // ==================== Composite Research ====================

    /// Called before the composite research call is issued
    fn on_research_start(&self, _request: &ResearchRequest) {}

    /// Called when the composite research call succeeds
    fn on_research_complete(&self, _result: &CompositeResult, _elapsed: Duration) {}

    /// Called when the composite research call fails
    fn on_research_failed(&self, _error: &ToolCallError) {}

    /// Called after an artifact has been written by the report store
    fn on_artifact_saved(&self, _path: &Path) {}

    // ==================== Workflow ====================

    /// Called when a workflow stage starts
    fn on_stage_start(&self, _stage: WorkflowStage) {}

    /// Called when a workflow stage completes.
    ///
    /// `size` is stage-specific: plan length in chars, number of generated
    /// tasks, number of collected sources, report length in chars.
    fn on_stage_complete(&self, _stage: WorkflowStage, _size: usize) {}

    /// Called when a workflow stage fails; no later stage will start
    fn on_stage_failed(&self, _stage: WorkflowStage, _error: &ToolCallError) {}

    // ==================== Batch ====================

    /// Called before job `index` (0-based) of `total` is attempted
    fn on_job_start(&self, _index: usize, _total: usize, _job: &JobSpec) {}

    /// Called once the job's outcome has been recorded
    fn on_job_complete(&self, _index: usize, _total: usize, _outcome: &JobOutcome) {}

    /// Called before the inter-job cooldown starts
    fn on_cooldown(&self, _duration: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {}
