//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default directory for saved reports
pub const DEFAULT_OUTPUT_DIR: &str = "./research-reports";

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory reports are written to (env: `OUTPUT_DIR`)
    pub dir: PathBuf,
    /// Also write the full structured result as `_data.json`
    pub save_data: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            save_data: true,
            color: true,
        }
    }
}
