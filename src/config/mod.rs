//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, delays, redirect cap, default paths)
//! - The fixed browser-like request header set
//! - CLI option types and the library `Config`

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
