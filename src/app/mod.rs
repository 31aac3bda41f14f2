//! Main application modules.
//!
//! This module provides input normalization, progress logging and statistics
//! printing used by the resolution engine.

pub mod logging;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use statistics::print_resolution_statistics;
pub use url::normalize_domain;
