//! Use cases
//!
//! Application-level operations that orchestrate calls through the
//! [`ToolGateway`](crate::ports::tool_gateway::ToolGateway) port.

pub mod conduct_research;
pub mod run_batch;
pub mod run_workflow;
pub(crate) mod shared;
