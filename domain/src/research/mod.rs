//! Research domain module
//!
//! Entities for the three ways of driving the remote service:
//!
//! - **Composite**: one [`ResearchRequest`] → one [`CompositeResult`]
//! - **Workflow**: a query run through the four [`WorkflowStage`]s → [`WorkflowResult`]
//! - **Batch**: ordered [`JobSpec`]s → ordered [`JobOutcome`]s, tallied by [`BatchSummary`]

pub mod batch;
pub mod composite;
pub mod request;
pub mod workflow;

pub use batch::{BatchSummary, FailureKind, JobOutcome, JobSpec};
pub use composite::CompositeResult;
pub use request::{DEFAULT_LANGUAGE, DEFAULT_MAX_RESULT, ResearchRequest};
pub use workflow::{WorkflowResult, WorkflowStage, count_sources};
