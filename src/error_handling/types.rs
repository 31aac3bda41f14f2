//! Error type definitions.
//!
//! This module defines the fatal initialization errors and the closed set of
//! per-URL resolution errors.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A request header value from the configuration is not a valid header.
    #[error("Invalid request header {name}: {reason}")]
    InvalidHeader {
        /// Header name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Category of a failed resolution.
///
/// The set is closed: every failure path of a resolution attempt maps to
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIterMacro)]
pub enum ErrorKind {
    /// Generic network or protocol failure: DNS, refused connection, error
    /// status, redirect policy violation.
    Broken,
    /// The URL cannot be dispatched: syntax error, missing host, unsupported scheme.
    InvalidUrl,
    /// The request did not complete within the timeout.
    Timeout,
    /// The URL or the response contains text that cannot be encoded or decoded.
    EncodingError,
    /// The peer reset the connection mid-request.
    ConnectionReset,
}

impl ErrorKind {
    /// Prefix written in front of each error line in the errors file.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Broken => "Broken",
            ErrorKind::InvalidUrl => "Cannot process",
            ErrorKind::Timeout => "Socket timeout exception",
            ErrorKind::EncodingError => "Unicode error",
            ErrorKind::ConnectionReset => "Connection error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure for one URL.
///
/// Displays as a single errors-file line: `<prefix>: <url> <detail>`.
/// Newlines are removed from `url` and `detail` on construction, so the line
/// never spans more than one row of the output file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {url} {detail}")]
pub struct ResolutionError {
    kind: ErrorKind,
    url: String,
    detail: String,
}

impl ResolutionError {
    /// Builds an error; line breaks in `url` and `detail` are removed.
    pub fn new(kind: ErrorKind, url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            url: strip_line_breaks(&url.into()),
            detail: strip_line_breaks(&detail.into()),
        }
    }

    /// The failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The normalized URL whose resolution failed.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Diagnostic text from the transport or the URL parser.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
