//! Tool Gateway port
//!
//! Defines the single capability the rest of the application needs from the
//! remote service: invoke a tool by name with arguments and get back either
//! a structured result or one of the [`ToolCallError`] kinds.

use async_trait::async_trait;
use research_domain::{DomainError, FailureKind, ToolArguments, ToolResult};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a tool call.
///
/// Every failure at any layer is reported as exactly one of these kinds;
/// none are retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolCallError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Remote tool error (code {code}): {message}")]
    RemoteTool { code: String, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
}

impl ToolCallError {
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    pub fn transport(cause: impl Into<String>) -> Self {
        Self::Transport(cause.into())
    }

    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RemoteTool {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Structured kind, for recording in a batch outcome
    pub fn kind(&self) -> FailureKind {
        match self {
            ToolCallError::Transport(_) => FailureKind::Transport,
            ToolCallError::Timeout(_) => FailureKind::Timeout,
            ToolCallError::Protocol(_) => FailureKind::Protocol,
            ToolCallError::RemoteTool { .. } => FailureKind::RemoteTool,
            ToolCallError::Validation(_) => FailureKind::Validation,
        }
    }
}

/// Gateway for remote tool invocation
///
/// This port defines how the application layer reaches the tool service.
/// The JSON-RPC over HTTP adapter lives in the infrastructure layer; tests
/// substitute scripted fakes.
#[async_trait]
pub trait ToolGateway: Send + Sync {
    /// Invoke `tool_name` once with `arguments`.
    async fn invoke(
        &self,
        tool_name: &str,
        arguments: ToolArguments,
    ) -> Result<ToolResult, ToolCallError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ToolCallError::remote("X", "bad").to_string(),
            "Remote tool error (code X): bad"
        );
        assert_eq!(
            ToolCallError::Timeout(Duration::from_secs(600)).to_string(),
            "Request timeout after 600s"
        );
        assert_eq!(
            ToolCallError::Timeout(Duration::from_millis(50)).to_string(),
            "Request timeout after 50ms"
        );
        assert_eq!(
            ToolCallError::Validation(DomainError::EmptyBatch).to_string(),
            "Validation error: Batch contains no jobs"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            ToolCallError::transport("refused").kind(),
            FailureKind::Transport
        );
        assert_eq!(
            ToolCallError::Timeout(Duration::from_secs(1)).kind(),
            FailureKind::Timeout
        );
        assert_eq!(ToolCallError::protocol("bad").kind(), FailureKind::Protocol);
        assert_eq!(
            ToolCallError::remote("-32000", "boom").kind(),
            FailureKind::RemoteTool
        );
        assert_eq!(
            ToolCallError::from(DomainError::EmptyQuery).kind(),
            FailureKind::Validation
        );
    }
}
