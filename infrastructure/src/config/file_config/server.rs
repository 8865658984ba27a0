//! Tool server configuration from TOML (`[server]` section)

use crate::rpc::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, ToolClientConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw tool server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// JSON-RPC endpoint (env: `MCP_SERVER_URL`)
    pub url: String,
    /// Bearer credential (env: `ACCESS_PASSWORD`)
    pub access_password: Option<String>,
    /// Per-call timeout in seconds (env: `MCP_CLIENT_TIMEOUT`)
    pub timeout_secs: u64,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            access_password: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl FileServerConfig {
    pub fn to_client_config(&self) -> ToolClientConfig {
        let config = ToolClientConfig::new(self.url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs.max(1)));
        match &self.access_password {
            Some(password) => config.with_access_password(password.clone()),
            None => config,
        }
    }
}
