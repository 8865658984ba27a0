//! JSON-RPC envelope codec for the tool server.
//!
//! This module builds `tools/call` request envelopes and unwraps response
//! envelopes. It performs no I/O.
//!
//! # Protocol Overview
//!
//! - **Request**: `{"jsonrpc": "2.0", "id": N, "method": "tools/call",
//!   "params": {"name": ..., "arguments": {...}}}`
//! - **Success**: `{"result": {"content": [{"type": "text", "text": "<JSON>"}]}}`;
//!   the first content block's text is itself a JSON document
//! - **Error**: `{"error": {"code": ..., "message": ...}}`
//!
//! Exactly one of `result` / `error` must be present. A `null` member counts
//! as absent.

use crate::rpc::error::{Result, RpcClientError};
use research_domain::{ToolArguments, ToolResult};
use serde::Serialize;
use serde_json::Value;

/// JSON-RPC protocol version tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// Method used for every tool invocation.
pub const TOOLS_CALL: &str = "tools/call";

/// Error code reported for results flagged with `isError`.
pub const TOOL_ERROR_CODE: &str = "tool_error";

/// JSON-RPC request
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: ToolCallParams,
}

/// Parameters of a `tools/call` request
#[derive(Debug, Clone, Serialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: ToolArguments,
}

/// Decoded success response
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallResponse {
    /// Correlation id echoed by the server, if any.
    pub id: Option<u64>,
    pub result: ToolResult,
}

/// Build the request envelope for one tool call.
pub fn encode(tool_name: &str, arguments: ToolArguments, id: u64) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: JSONRPC_VERSION,
        id,
        method: TOOLS_CALL,
        params: ToolCallParams {
            name: tool_name.to_string(),
            arguments,
        },
    }
}

/// Decode a raw response body into the tool's structured result.
pub fn decode(raw: &[u8]) -> Result<ToolResult> {
    decode_response(raw).map(|r| r.result)
}

/// Decode a raw response body, keeping the echoed correlation id.
pub fn decode_response(raw: &[u8]) -> Result<ToolCallResponse> {
    let envelope: Value = serde_json::from_slice(raw)?;
    let Value::Object(envelope) = envelope else {
        return Err(malformed("response is not a JSON object"));
    };

    let id = envelope.get("id").and_then(Value::as_u64);
    let error = envelope.get("error").filter(|v| !v.is_null());
    let result = envelope.get("result").filter(|v| !v.is_null());

    match (error, result) {
        (Some(_), Some(_)) => Err(malformed("response has both 'error' and 'result'")),
        (None, None) => Err(malformed("response has neither 'error' nor 'result'")),
        (Some(error), None) => Err(decode_error(error)),
        (None, Some(result)) => Ok(ToolCallResponse {
            id,
            result: decode_result(result)?,
        }),
    }
}

fn decode_error(error: &Value) -> RpcClientError {
    let Some(message) = error.get("message").and_then(Value::as_str) else {
        return malformed("error object has no 'message'");
    };
    let code = match error.get("code") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "unknown".to_string(),
    };
    RpcClientError::RpcError {
        code,
        message: message.to_string(),
    }
}

fn decode_result(result: &Value) -> Result<ToolResult> {
    let text = result
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("result has no 'content' array"))?
        .first()
        .ok_or_else(|| malformed("result 'content' array is empty"))?
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("first content block has no 'text'"))?;

    // Tool handlers report their own failures in-band
    if result.get("isError").and_then(Value::as_bool) == Some(true) {
        return Err(RpcClientError::RpcError {
            code: TOOL_ERROR_CODE.to_string(),
            message: text.to_string(),
        });
    }

    let payload: Value = serde_json::from_str(text)
        .map_err(|e| malformed(format!("tool result text is not JSON: {}", e)))?;
    Ok(ToolResult::new(payload))
}

fn malformed(message: impl Into<String>) -> RpcClientError {
    RpcClientError::MalformedResponse(message.into())
}
