//! Error types for the JSON-RPC adapter

use research_application::ToolCallError;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for JSON-RPC operations
pub type Result<T> = std::result::Result<T, RpcClientError>;

/// Errors that can occur when talking to the tool server
#[derive(Error, Debug)]
pub enum RpcClientError {
    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON-RPC error (code {code}): {message}")]
    RpcError { code: String, message: String },

    #[error("Response id {received} does not match request id {expected}")]
    IdMismatch { expected: u64, received: u64 },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout(Duration),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("HTTP client error: {0}")]
    ClientBuild(String),
}

impl From<RpcClientError> for ToolCallError {
    fn from(e: RpcClientError) -> Self {
        match e {
            RpcClientError::RpcError { code, message } => ToolCallError::RemoteTool { code, message },
            RpcClientError::Timeout(after) => ToolCallError::Timeout(after),
            RpcClientError::SerializationError(_)
            | RpcClientError::MalformedResponse(_)
            | RpcClientError::IdMismatch { .. } => ToolCallError::Protocol(e.to_string()),
            RpcClientError::HttpStatus { .. }
            | RpcClientError::ConnectionFailed(_)
            | RpcClientError::InvalidEndpoint(_)
            | RpcClientError::ClientBuild(_) => ToolCallError::Transport(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_maps_to_remote_tool() {
        let err: ToolCallError = RpcClientError::RpcError {
            code: "X".to_string(),
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(err, ToolCallError::remote("X", "bad"));
    }

    #[test]
    fn test_codec_errors_map_to_protocol() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            ToolCallError::from(RpcClientError::from(json_err)),
            ToolCallError::Protocol(_)
        ));
        assert!(matches!(
            ToolCallError::from(RpcClientError::IdMismatch {
                expected: 1,
                received: 2
            }),
            ToolCallError::Protocol(_)
        ));
    }

    #[test]
    fn test_transport_errors_map_to_transport() {
        let err: ToolCallError = RpcClientError::HttpStatus {
            status: 401,
            body: "Unauthorized".to_string(),
        }
        .into();
        assert_eq!(err, ToolCallError::transport("HTTP 401: Unauthorized"));
    }
}
