//! Error categorization.
//!
//! Maps transport and URL parsing failures onto the closed set of
//! `ErrorKind`s. Both the resolver and the tests go through these functions,
//! so classification lives in one place.

use std::error::Error as StdError;
use std::io;

use super::types::ErrorKind;

/// Categorizes a URL parse failure.
///
/// An internationalized host that cannot be converted to its ASCII form is an
/// encoding problem; every other parse failure means the URL itself is unusable.
pub fn categorize_parse_error(error: &url::ParseError) -> ErrorKind {
    match error {
        url::ParseError::IdnaError => ErrorKind::EncodingError,
        _ => ErrorKind::InvalidUrl,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorKind`.
///
/// Checks run from most to least specific: a timed-out connect is also a
/// connect error, and a reset during the request is also a request error.
///
/// Anything not otherwise recognised (DNS failure, refused connection, error
/// status, redirect policy violation) is `Broken`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorKind {
    if error.is_timeout() || has_io_error_kind(error, io::ErrorKind::TimedOut) {
        ErrorKind::Timeout
    } else if has_io_error_kind(error, io::ErrorKind::ConnectionReset) {
        ErrorKind::ConnectionReset
    } else if error.is_decode() {
        ErrorKind::EncodingError
    } else if error.is_builder() {
        ErrorKind::InvalidUrl
    } else {
        ErrorKind::Broken
    }
}

/// Renders an error with its full source chain (`outer: inner: root`).
///
/// reqwest's top-level message is generic ("error sending request for url
/// ..."); the useful part (DNS failure, refused connection) is in the sources.
/// Consecutive duplicate messages are collapsed.
pub fn describe_error(error: &(dyn StdError + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        let msg = err.to_string();
        if parts.last() != Some(&msg) {
            parts.push(msg);
        }
        current = err.source();
    }
    parts.join(": ")
}

/// Walks the source chain looking for an `io::Error` of the given kind.
fn has_io_error_kind(error: &(dyn StdError + 'static), kind: io::ErrorKind) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if io_err.kind() == kind {
                return true;
            }
        }
        current = err.source();
    }
    false
}
