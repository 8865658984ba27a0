//! Domain layer for deep-research-client
//!
//! This crate contains the entities and value objects shared by every
//! other layer. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! The remote service exposes named **tools**. Each is invoked with a
//! schemaless argument object and answers with a structured JSON result
//! ([`ToolResult`]). The client never interprets a result beyond picking
//! out the fields it threads into the next call.
//!
//! ## Composite / Workflow / Batch
//!
//! - **Composite**: a single `gene-research` call ([`ResearchRequest`])
//! - **Workflow**: plan → queries → search → report ([`WorkflowStage`])
//! - **Batch**: sequential composite calls with per-job isolation ([`JobOutcome`])

pub mod core;
pub mod research;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, query::ResearchQuery};
pub use research::{
    BatchSummary, CompositeResult, FailureKind, JobOutcome, JobSpec, ResearchRequest,
    WorkflowResult, WorkflowStage,
};
pub use tool::{ToolArguments, ToolResult};
