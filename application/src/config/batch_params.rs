//! Batch parameters: pacing of sequential batch execution.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default pause between two consecutive batch jobs.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5);

/// Batch loop control parameters.
///
/// Used by [`RunBatchUseCase`](crate::use_cases::run_batch::RunBatchUseCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParams {
    /// Pause inserted between two consecutive jobs (never before the first
    /// or after the last).
    pub cooldown: Duration,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

impl BatchParams {
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_cooldown_secs(self, seconds: u64) -> Self {
        self.with_cooldown(Duration::from_secs(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cooldown() {
        assert_eq!(BatchParams::default().cooldown, Duration::from_secs(5));
    }

    #[test]
    fn test_builder() {
        let params = BatchParams::default().with_cooldown_secs(30);
        assert_eq!(params.cooldown, Duration::from_secs(30));
    }
}
