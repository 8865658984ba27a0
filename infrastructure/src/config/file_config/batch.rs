//! Batch configuration from TOML (`[batch]` section)

use research_application::BatchParams;
use serde::{Deserialize, Serialize};

/// Raw batch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBatchConfig {
    /// Pause between consecutive jobs, in seconds
    pub cooldown_secs: u64,
}

impl Default for FileBatchConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: BatchParams::default().cooldown.as_secs(),
        }
    }
}

impl FileBatchConfig {
    pub fn to_batch_params(&self) -> BatchParams {
        BatchParams::default().with_cooldown_secs(self.cooldown_secs)
    }
}
