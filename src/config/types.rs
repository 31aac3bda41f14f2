//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CONCURRENCY, DEFAULT_DOMAINS_FILE, DEFAULT_ERRORS_FILE, DEFAULT_OUTPUT_FILE,
    DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, REQUEST_DELAY, REQUEST_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// The three positional paths are optional; options default to the fixed
/// behaviour (2s timeout, 200ms pause, 10 redirects, one request at a time).
///
/// # Examples
///
/// ```bash
/// # Read domains.txt, write output.txt and errors.txt
/// link_resolver
///
/// # Custom paths
/// link_resolver candidates.txt live.txt failed.txt
///
/// # Four workers sharing one 200ms request clock
/// link_resolver candidates.txt --concurrency 4
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "link_resolver",
    about = "Resolves domains and URLs to their final post-redirect destination."
)]
pub struct Opt {
    /// File listing one domain or URL per line
    #[arg(value_parser, default_value = DEFAULT_DOMAINS_FILE)]
    pub domains_file: PathBuf,

    /// File receiving the resolved URLs
    #[arg(value_parser, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// File receiving the categorized error lines
    #[arg(value_parser, default_value = DEFAULT_ERRORS_FILE)]
    pub errors_file: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Pause between requests in milliseconds
    #[arg(long, default_value_t = REQUEST_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Maximum redirect hops followed per URL
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Number of URLs resolved at once
    ///
    /// Values above 1 switch the pause to a shared clock so the aggregate
    /// request rate stays the same as a sequential run.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY as u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use link_resolver::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     domains_file: PathBuf::from("candidates.txt"),
///     concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read domains from
    pub domains_file: PathBuf,

    /// File the resolved URLs are written to
    pub output_file: PathBuf,

    /// File the error lines are written to
    pub errors_file: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout
    pub timeout: Duration,

    /// Pause between requests
    pub delay: Duration,

    /// Maximum redirect hops followed per URL
    pub max_redirects: usize,

    /// Number of URLs resolved at once
    pub concurrency: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains_file: PathBuf::from(DEFAULT_DOMAINS_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            errors_file: PathBuf::from(DEFAULT_ERRORS_FILE),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout: REQUEST_TIMEOUT,
            delay: REQUEST_DELAY,
            max_redirects: MAX_REDIRECT_HOPS,
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domains_file: opt.domains_file,
            output_file: opt.output_file,
            errors_file: opt.errors_file,
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout: Duration::from_millis(opt.timeout_ms),
            delay: Duration::from_millis(opt.delay_ms),
            max_redirects: opt.max_redirects,
            concurrency: usize::from(opt.concurrency),
            user_agent: opt.user_agent,
        }
    }
}
