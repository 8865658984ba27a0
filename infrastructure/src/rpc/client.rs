//! HTTP tool client.
//!
//! [`HttpToolClient`] implements the application's [`ToolGateway`] port by
//! POSTing one JSON-RPC envelope per call to the tool server and decoding
//! the reply with the [`protocol`](super::protocol) codec.

use crate::rpc::error::{Result, RpcClientError};
use crate::rpc::protocol;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use research_application::{ToolCallError, ToolGateway};
use research_domain::{ToolArguments, ToolResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default tool server endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/mcp";

/// Default per-call timeout. Research calls can legitimately run for minutes.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Connection settings for [`HttpToolClient`]
#[derive(Debug, Clone)]
pub struct ToolClientConfig {
    pub endpoint: String,
    /// Sent as `Authorization: Bearer <value>` when present and non-empty
    pub access_password: Option<String>,
    pub timeout: Duration,
}

impl Default for ToolClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_password: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ToolClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_access_password(mut self, password: impl Into<String>) -> Self {
        self.access_password = Some(password.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn bearer(&self) -> Option<&str> {
        self.access_password
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }
}

/// JSON-RPC over HTTP client for the tool server.
///
/// Each call takes the next value of a per-client counter as its request id
/// (first call is 1). The counter is atomic, so a shared client never hands
/// out the same id twice.
pub struct HttpToolClient {
    http: reqwest::Client,
    config: ToolClientConfig,
    next_id: AtomicU64,
}

impl HttpToolClient {
    pub fn new(config: ToolClientConfig) -> Result<Self> {
        reqwest::Url::parse(&config.endpoint)
            .map_err(|e| RpcClientError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| RpcClientError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            config,
            next_id: AtomicU64::new(0),
        })
    }

    pub fn config(&self) -> &ToolClientConfig {
        &self.config
    }

    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Perform one call; no retries.
    pub async fn call(&self, tool_name: &str, arguments: ToolArguments) -> Result<ToolResult> {
        let id = self.next_request_id();
        let request = protocol::encode(tool_name, arguments, id);
        debug!("Calling tool '{}' (id {})", tool_name, id);

        let started = Instant::now();
        let result = tokio::time::timeout(self.config.timeout, self.exchange(&request))
            .await
            .map_err(|_| RpcClientError::Timeout(self.config.timeout))??;

        debug!(
            "Tool '{}' (id {}) answered in {:.1}s",
            tool_name,
            id,
            started.elapsed().as_secs_f64()
        );
        Ok(result)
    }

    async fn exchange(&self, request: &protocol::JsonRpcRequest) -> Result<ToolResult> {
        let mut builder = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request);
        if let Some(token) = self.config.bearer() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| self.map_reqwest(e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.map_reqwest(e))?;

        if !status.is_success() {
            // A server may still describe the failure with a JSON-RPC error
            if let Err(e @ RpcClientError::RpcError { .. }) = protocol::decode_response(&body) {
                return Err(e);
            }
            warn!("Tool server returned HTTP {}", status.as_u16());
            return Err(RpcClientError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).chars().take(200).collect(),
            });
        }

        let response = protocol::decode_response(&body)?;
        match response.id {
            Some(received) if received != request.id => Err(RpcClientError::IdMismatch {
                expected: request.id,
                received,
            }),
            _ => Ok(response.result),
        }
    }

    fn map_reqwest(&self, e: reqwest::Error) -> RpcClientError {
        if e.is_timeout() {
            RpcClientError::Timeout(self.config.timeout)
        } else if e.is_connect() {
            RpcClientError::ConnectionFailed(e.to_string())
        } else {
            RpcClientError::ConnectionFailed(format!("request failed: {}", e))
        }
    }
}

#[async_trait]
impl ToolGateway for HttpToolClient {
    async fn invoke(
        &self,
        tool_name: &str,
        arguments: ToolArguments,
    ) -> std::result::Result<ToolResult, ToolCallError> {
        self.call(tool_name, arguments).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn envelope(id: Value, payload: &Value) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": {"content": [{"type": "text", "text": payload.to_string()}]}
        })
    }

    /// Responds with `payload`, echoing the request's id
    fn echo_id(payload: Value) -> impl Fn(&Request) -> ResponseTemplate + Send + Sync {
        move |req: &Request| {
            let body: Value = serde_json::from_slice(&req.body).unwrap();
            ResponseTemplate::new(200).set_body_json(envelope(body["id"].clone(), &payload))
        }
    }

    fn client_for(server: &MockServer) -> HttpToolClient {
        HttpToolClient::new(ToolClientConfig::new(format!("{}/api/mcp", server.uri()))).unwrap()
    }

    fn args(value: Value) -> ToolArguments {
        match value {
            Value::Object(map) => map,
            _ => panic!("arguments must be an object"),
        }
    }

    #[tokio::test]
    async fn test_call_returns_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/mcp"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "jsonrpc": "2.0",
                "method": "tools/call",
                "params": {"name": "write-research-plan", "arguments": {"query": "talB"}}
            })))
            .respond_with(echo_id(json!({"reportPlan": "1. Background"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .invoke("write-research-plan", args(json!({"query": "talB"})))
            .await
            .unwrap();

        assert_eq!(result.get_str("reportPlan"), Some("1. Background"));
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(echo_id(json!({"ok": true})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        for _ in 0..3 {
            client.invoke("search-task", ToolArguments::new()).await.unwrap();
        }

        let ids: Vec<u64> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| serde_json::from_slice::<Value>(&r.body).unwrap()["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_bearer_credential_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(echo_id(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let config =
            ToolClientConfig::new(format!("{}/api/mcp", server.uri())).with_access_password("s3cret");
        let client = HttpToolClient::new(config).unwrap();

        assert!(client.invoke("search-task", ToolArguments::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_no_credential_header_when_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(echo_id(json!({"ok": true})))
            .mount(&server)
            .await;

        let config =
            ToolClientConfig::new(format!("{}/api/mcp", server.uri())).with_access_password("  ");
        let client = HttpToolClient::new(config).unwrap();
        client.invoke("search-task", ToolArguments::new()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_error_envelope_is_remote_tool() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": "X", "message": "bad"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .invoke("search-task", ToolArguments::new())
            .await
            .unwrap_err();
        assert_eq!(err, ToolCallError::remote("X", "bad"));
    }

    #[tokio::test]
    async fn test_mismatched_id_is_protocol() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope(json!(42), &json!({"ok": true}))),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .invoke("search-task", ToolArguments::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolCallError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_protocol() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .invoke("search-task", ToolArguments::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolCallError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_http_error_status_is_transport() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .invoke("search-task", ToolArguments::new())
            .await
            .unwrap_err();
        assert_eq!(err, ToolCallError::transport("HTTP 401: Unauthorized"));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope(json!(1), &json!({"ok": true})))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = ToolClientConfig::new(format!("{}/api/mcp", server.uri()))
            .with_timeout(Duration::from_millis(50));
        let client = HttpToolClient::new(config).unwrap();

        let err = client
            .invoke("search-task", ToolArguments::new())
            .await
            .unwrap_err();
        assert_eq!(err, ToolCallError::Timeout(Duration::from_millis(50)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client =
            HttpToolClient::new(ToolClientConfig::new(format!("http://127.0.0.1:{}/api/mcp", port)))
                .unwrap();

        let err = client
            .invoke("search-task", ToolArguments::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolCallError::Transport(_)));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        assert!(matches!(
            HttpToolClient::new(ToolClientConfig::new("not a url")),
            Err(RpcClientError::InvalidEndpoint(_))
        ));
    }
}
