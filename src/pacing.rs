use async_trait::async_trait;
use std::time::Duration;

/// Pause inserted between consecutive API calls to stay under the upstream
/// request-rate ceiling.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn wait(&self);
}

/// Sleeps a fixed interval regardless of response latency.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn wait(&self) {}
}
