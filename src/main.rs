//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `link_resolver` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use link_resolver::initialization::init_logger_with;
use link_resolver::{run_resolution, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; it is only a convenient place for RUST_LOG
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_resolution(config).await {
        Ok(report) => {
            println!(
                "Resolved {} unique URL{} from {} line{}: {} live, {} error line{} in {:.1}s",
                report.unique_urls,
                if report.unique_urls == 1 { "" } else { "s" },
                report.total_lines,
                if report.total_lines == 1 { "" } else { "s" },
                report.resolved,
                report.errors,
                if report.errors == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!(
                "Results in {}, errors in {}",
                report.output_file.display(),
                report.errors_file.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("link_resolver error: {:#}", e);
            process::exit(1);
        }
    }
}
