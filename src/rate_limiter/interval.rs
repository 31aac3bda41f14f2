//! Shared interval clock for concurrent runs.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use super::RequestGate;

/// Ticketed clock spacing request starts by a fixed interval.
///
/// Every `acquire` reserves the next free slot under a lock and sleeps until
/// it. Slots are handed out in call order and never closer than `interval`,
/// however many workers call in. An idle clock does not bank slots: after a
/// quiet period the next request goes out immediately, then spacing resumes.
#[derive(Debug)]
pub struct IntervalGate {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl IntervalGate {
    /// Gate spacing request starts by `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Reserves the next slot and returns when it starts.
    fn reserve(&self) -> Instant {
        let now = Instant::now();
        // The guarded value is a plain Instant; a poisoned lock still holds a usable one.
        let mut next = self
            .next_slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let slot = match *next {
            Some(reserved) if reserved > now => reserved,
            _ => now,
        };
        *next = Some(slot + self.interval);
        slot
    }
}

#[async_trait]
impl RequestGate for IntervalGate {
    async fn acquire(&self) {
        let slot = self.reserve();
        tokio::time::sleep_until(slot).await;
    }
}
