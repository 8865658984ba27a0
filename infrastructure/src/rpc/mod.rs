//! JSON-RPC over HTTP adapter for the tool server.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpToolClient, ToolClientConfig};
pub use error::RpcClientError;
