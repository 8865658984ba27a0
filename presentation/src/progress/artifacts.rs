//! Notifier decorator that remembers where artifacts were saved

use research_application::{ProgressNotifier, ToolCallError};
use research_domain::{CompositeResult, JobOutcome, JobSpec, ResearchRequest, WorkflowStage};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

/// Forwards every event to `inner` and records saved artifact paths.
pub struct ArtifactCollector<'a> {
    inner: &'a dyn ProgressNotifier,
    paths: Mutex<Vec<PathBuf>>,
}

impl<'a> ArtifactCollector<'a> {
    pub fn new(inner: &'a dyn ProgressNotifier) -> Self {
        Self {
            inner,
            paths: Mutex::new(Vec::new()),
        }
    }

    /// Paths saved so far, in order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.paths.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl ProgressNotifier for ArtifactCollector<'_> {
    fn on_research_start(&self, request: &ResearchRequest) {
        self.inner.on_research_start(request);
    }

    fn on_research_complete(&self, result: &CompositeResult, elapsed: Duration) {
        self.inner.on_research_complete(result, elapsed);
    }

    fn on_research_failed(&self, error: &ToolCallError) {
        self.inner.on_research_failed(error);
    }

    fn on_artifact_saved(&self, path: &Path) {
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(path.to_path_buf());
        }
        self.inner.on_artifact_saved(path);
    }

    fn on_stage_start(&self, stage: WorkflowStage) {
        self.inner.on_stage_start(stage);
    }

    fn on_stage_complete(&self, stage: WorkflowStage, size: usize) {
        self.inner.on_stage_complete(stage, size);
    }

    fn on_stage_failed(&self, stage: WorkflowStage, error: &ToolCallError) {
        self.inner.on_stage_failed(stage, error);
    }

    fn on_job_start(&self, index: usize, total: usize, job: &JobSpec) {
        self.inner.on_job_start(index, total, job);
    }

    fn on_job_complete(&self, index: usize, total: usize, outcome: &JobOutcome) {
        self.inner.on_job_complete(index, total, outcome);
    }

    fn on_cooldown(&self, duration: Duration) {
        self.inner.on_cooldown(duration);
    }
}
