//! Error handling and resolution statistics.
//!
//! This module provides:
//! - Error type definitions (initialization failures, classified resolution errors)
//! - Categorization of transport and URL parsing errors into the five error kinds
//! - Per-kind statistics tracking for the end-of-run summary
//!
//! Every failure of a single URL is recoverable: it becomes a `ResolutionError`
//! and the run moves on. Only initialization and file I/O failures are fatal.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_parse_error, categorize_reqwest_error, describe_error};
pub use stats::ResolutionStats;
pub use types::{ErrorKind, InitializationError, ResolutionError};
