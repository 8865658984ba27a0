//! Infrastructure layer for deep-research-client
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the JSON-RPC tool client, configuration
//! file loading and report persistence.

pub mod config;
pub mod rpc;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileOutputConfig, FileServerConfig, JobFileError, default_jobs,
    load_jobs,
};
pub use rpc::{
    HttpToolClient, RpcClientError, ToolClientConfig,
    error::Result,
};
pub use storage::FileReportStore;
