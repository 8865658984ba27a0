//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Each section converts into the client or application type it configures.

mod batch;
mod output;
mod research;
mod server;

pub use batch::FileBatchConfig;
pub use output::{DEFAULT_OUTPUT_DIR, FileOutputConfig};
pub use research::FileResearchConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};

/// Placeholder shown instead of the access password
const REDACTED: &str = "********";

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Tool server connection
    pub server: FileServerConfig,
    /// Report persistence
    pub output: FileOutputConfig,
    /// Batch pacing
    pub batch: FileBatchConfig,
    /// Defaults applied to every research request
    pub research: FileResearchConfig,
}

impl FileConfig {
    /// Copy of this config that is safe to print.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.server.access_password.is_some() {
            config.server.access_password = Some(REDACTED.to_string());
        }
        config
    }

    /// Render the effective configuration as TOML, with secrets redacted.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&self.redacted())
    }
}
