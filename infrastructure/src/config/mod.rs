//! Configuration file loading for deep-research
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`MCP_SERVER_URL`, `ACCESS_PASSWORD`,
//!    `MCP_CLIENT_TIMEOUT`, `OUTPUT_DIR`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./deep-research.toml` or `./.deep-research.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/deep-research/config.toml`
//! 5. Default values
//!
//! Batch job files are read here as well.

mod file_config;
mod job_file;
mod loader;

pub use file_config::{
    DEFAULT_OUTPUT_DIR, FileBatchConfig, FileConfig, FileOutputConfig, FileResearchConfig,
    FileServerConfig,
};
pub use job_file::{FileJob, JobFileError, default_jobs, load_jobs};
pub use loader::ConfigLoader;
