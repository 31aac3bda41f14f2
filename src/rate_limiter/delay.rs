//! Fixed post-attempt delay.

use std::time::Duration;

use async_trait::async_trait;

use super::RequestGate;

/// Sleeps a fixed pause after every attempt.
///
/// With one worker this spaces the end of one request and the start of the
/// next by `delay`. It does not bound the rate of concurrent workers; use
/// `IntervalGate` for that.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Gate sleeping `delay` after each attempt.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The pause applied after each attempt.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl RequestGate for FixedDelay {
    async fn acquire(&self) {}

    async fn complete(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
