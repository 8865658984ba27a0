//! Run Batch use case
//!
//! Runs independent composite research jobs one after another.
//!
//! - Jobs run strictly in input order, never concurrently: the remote
//!   service is rate-limited per credential.
//! - A failed job is recorded as [`JobOutcome::Failure`] and the batch moves
//!   on; nothing a job does affects another job's arguments.
//! - A fixed cooldown separates consecutive jobs (none before the first,
//!   none after the last).

use crate::config::BatchParams;
use crate::ports::cooldown::Cooldown;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::tool_gateway::ToolCallError;
use crate::use_cases::conduct_research::ConductResearchUseCase;
use research_domain::{BatchSummary, DomainError, JobOutcome, JobSpec};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for sequential batch research.
pub struct RunBatchUseCase {
    research: ConductResearchUseCase,
    cooldown: Arc<dyn Cooldown>,
    params: BatchParams,
}

impl RunBatchUseCase {
    pub fn new(research: ConductResearchUseCase, cooldown: Arc<dyn Cooldown>) -> Self {
        Self {
            research,
            cooldown,
            params: BatchParams::default(),
        }
    }

    pub fn with_params(mut self, params: BatchParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, jobs: &[JobSpec]) -> Result<Vec<JobOutcome>, ToolCallError> {
        self.execute_with_progress(jobs, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Only an empty job list is an error; per-job failures are returned as
    /// outcomes in input order.
    pub async fn execute_with_progress(
        &self,
        jobs: &[JobSpec],
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<JobOutcome>, ToolCallError> {
        if jobs.is_empty() {
            return Err(DomainError::EmptyBatch.into());
        }

        let total = jobs.len();
        info!("Starting batch of {} jobs", total);

        let mut outcomes = Vec::with_capacity(total);
        for (index, job) in jobs.iter().enumerate() {
            if index > 0 {
                progress.on_cooldown(self.params.cooldown);
                self.cooldown.wait(self.params.cooldown).await;
            }

            progress.on_job_start(index, total, job);

            let outcome = match self
                .research
                .execute_with_progress(job.request(), progress)
                .await
            {
                Ok(result) => JobOutcome::Success {
                    key: job.display_key().to_string(),
                    result,
                },
                Err(e) => {
                    warn!("Job {} ({}) failed: {}", index + 1, job.display_key(), e);
                    JobOutcome::Failure {
                        key: job.display_key().to_string(),
                        reason: e.to_string(),
                        kind: e.kind(),
                    }
                }
            };

            progress.on_job_complete(index, total, &outcome);
            outcomes.push(outcome);
        }

        let summary = BatchSummary::from_outcomes(&outcomes);
        info!(
            "Batch finished: {}/{} succeeded, {} failed",
            summary.succeeded, summary.total, summary.failed
        );

        Ok(outcomes)
    }
}
