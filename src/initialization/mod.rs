//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (plain or JSON, on stderr)
//! - HTTP client (timeouts and redirect policy)
//! - Request gate (sequential delay or shared interval clock)
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;
use std::time::Duration;

use crate::rate_limiter::{FixedDelay, IntervalGate, RequestGate};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the request gate for a run.
///
/// A sequential run (`concurrency <= 1`) sleeps `delay` after every attempt.
/// With several workers the pause becomes a shared clock that spaces request
/// starts by `delay`, so the aggregate rate matches the sequential one.
///
/// # Arguments
///
/// * `delay` - Minimum spacing between requests
/// * `concurrency` - Number of URLs resolved at once
pub fn init_request_gate(delay: Duration, concurrency: usize) -> Arc<dyn RequestGate> {
    if concurrency <= 1 {
        Arc::new(FixedDelay::new(delay))
    } else {
        Arc::new(IntervalGate::new(delay))
    }
}
