//! Request pacing.
//!
//! A run must not hammer the hosts it probes. Pacing is expressed as a gate
//! the engine passes through around every resolution attempt:
//!
//! - `acquire()` before the request is sent; blocks until it is permitted
//! - `complete()` after the attempt finishes, whatever its outcome
//!
//! Two implementations share this contract:
//! - `FixedDelay`: sleep a fixed pause after every attempt (sequential runs)
//! - `IntervalGate`: a shared clock handing out request start slots spaced by
//!   a fixed interval (concurrent runs)

mod delay;
mod interval;

use async_trait::async_trait;

pub use delay::FixedDelay;
pub use interval::IntervalGate;

/// Scheduling gate around each resolution attempt.
///
/// Implementations are shared by every worker of a run, so the bound they
/// enforce is on the aggregate request rate.
#[async_trait]
pub trait RequestGate: Send + Sync {
    /// Waits until the next request may be sent.
    async fn acquire(&self);

    /// Called once the attempt finished, successfully or not.
    async fn complete(&self) {}
}
