//! Run orchestration.
//!
//! Ties the pieces of a run together: read the domain list, build the
//! resolver and request gate from `Config`, drive the engine, then write both
//! output files and report.

mod finalize;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::engine::ResolutionEngine;
use crate::initialization::init_request_gate;
use crate::input::read_domain_lines;
use crate::resolve::{HttpResolver, Resolve, ResolverSettings};

use finalize::finalize_run;

/// Results of a resolution run.
#[derive(Debug, Clone)]
pub struct ResolutionReport {
    /// Lines read from the domains file
    pub total_lines: usize,
    /// Distinct normalized URLs attempted
    pub unique_urls: usize,
    /// Distinct resolved URLs written to the output file
    pub resolved: usize,
    /// Distinct error lines written to the errors file
    pub errors: usize,
    /// Path of the resolved URLs file
    pub output_file: PathBuf,
    /// Path of the error lines file
    pub errors_file: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a resolution with the provided configuration.
///
/// This is the main entry point for the library. It reads the domains file,
/// resolves every distinct URL once, and writes the output and errors files.
/// Both files are always written, even when empty.
///
/// # Errors
///
/// Per-URL failures never surface here; they end up in the errors file. This
/// function returns an error only if:
/// - The domains file cannot be read
/// - The HTTP client cannot be initialized
/// - Either output file cannot be written
///
/// # Example
///
/// ```no_run
/// use link_resolver::{run_resolution, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     domains_file: PathBuf::from("candidates.txt"),
///     ..Default::default()
/// };
/// let report = run_resolution(config).await?;
/// println!("{} live URLs", report.resolved);
/// # Ok(())
/// # }
/// ```
pub async fn run_resolution(config: Config) -> Result<ResolutionReport> {
    let settings =
        ResolverSettings::from_config(&config).context("Failed to build request settings")?;
    let resolver = HttpResolver::new(settings).context("Failed to initialize HTTP client")?;
    run_resolution_with(&config, resolver).await
}

/// Runs a resolution with a caller-supplied resolver.
///
/// Same as `run_resolution` except for how URLs are resolved; the request
/// gate and concurrency still come from `config`.
pub async fn run_resolution_with<R: Resolve>(
    config: &Config,
    resolver: R,
) -> Result<ResolutionReport> {
    let start_time = Instant::now();

    info!("reading domains from: {}", config.domains_file.display());
    let lines = read_domain_lines(&config.domains_file).await?;
    let total_lines = lines.len();

    let gate = init_request_gate(config.delay, config.concurrency);
    let engine = ResolutionEngine::new(resolver, gate).with_concurrency(config.concurrency);

    let results = engine.run(&lines).await;

    finalize_run(config, total_lines, &results, engine.stats(), start_time).await
}
