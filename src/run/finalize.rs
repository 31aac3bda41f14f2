//! Run finalization.
//!
//! Writes both output files and builds the report once the engine is done.

use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::app::print_resolution_statistics;
use crate::config::Config;
use crate::engine::ResultSet;
use crate::error_handling::ResolutionStats;
use crate::export::write_lines;

use super::ResolutionReport;

/// Finalize a run and produce the report.
///
/// 1. Write the resolved URLs file
/// 2. Write the error lines file
/// 3. Log per-kind statistics
/// 4. Construct and return the report
///
/// # Errors
///
/// Returns an error if either file cannot be written.
pub async fn finalize_run(
    config: &Config,
    total_lines: usize,
    results: &ResultSet,
    stats: &ResolutionStats,
    start_time: Instant,
) -> Result<ResolutionReport> {
    info!(
        "outputting {} results to: {}",
        results.resolved_len(),
        config.output_file.display()
    );
    let resolved = write_lines(&config.output_file, results.resolved())
        .await
        .context("Failed to write results file")?;

    info!(
        "outputting {} errors to: {}",
        results.errors_len(),
        config.errors_file.display()
    );
    let errors = write_lines(&config.errors_file, results.errors())
        .await
        .context("Failed to write errors file")?;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_resolution_statistics(stats, elapsed_seconds);

    Ok(ResolutionReport {
        total_lines,
        unique_urls: stats.resolved_count() + stats.total_errors(),
        resolved,
        errors,
        output_file: config.output_file.clone(),
        errors_file: config.errors_file.clone(),
        elapsed_seconds,
    })
}
