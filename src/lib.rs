//! link_resolver library: bulk URL resolution
//!
//! Resolves lists of domains and URLs to their final, post-redirect
//! destination and sorts the outcomes into live URLs and categorized failures.
//!
//! # Example
//!
//! ```no_run
//! use link_resolver::{run_resolution, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     domains_file: std::path::PathBuf::from("domains.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_resolution(config).await?;
//! println!(
//!     "{} unique URLs: {} live, {} error lines",
//!     report.unique_urls, report.resolved, report.errors
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod engine;
pub mod error_handling;
mod export;
pub mod initialization;
mod input;
pub mod rate_limiter;
pub mod resolve;
mod run;

// Re-export public API
pub use app::normalize_domain;
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use engine::{ResolutionEngine, ResultSet};
pub use error_handling::{ErrorKind, ResolutionError};
pub use resolve::{HttpResolver, Resolve, ResolverSettings};
pub use run::{run_resolution, run_resolution_with, ResolutionReport};
