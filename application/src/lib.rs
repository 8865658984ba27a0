//! Application layer for deep-research-client
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BatchParams, ResearchParams};
pub use ports::{
    cooldown::{Cooldown, TokioCooldown},
    progress::{NoProgress, ProgressNotifier},
    report_store::{ReportStore, ReportStoreError},
    tool_gateway::{ToolCallError, ToolGateway},
};
pub use use_cases::conduct_research::ConductResearchUseCase;
pub use use_cases::run_batch::RunBatchUseCase;
pub use use_cases::run_workflow::{RunWorkflowInput, RunWorkflowUseCase};
