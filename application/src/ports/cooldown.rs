//! Cooldown port
//!
//! The batch runner pauses between jobs through this port so the pause can
//! be observed (and skipped) in tests.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the current task for a fixed interval.
#[async_trait]
pub trait Cooldown: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Real cooldown backed by `tokio::time::sleep`.
pub struct TokioCooldown;

#[async_trait]
impl Cooldown for TokioCooldown {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
