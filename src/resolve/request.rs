//! Request settings and the fixed header set.
//!
//! Built once per run from `Config` and shared read-only by every resolution.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

use crate::config::{
    Config, ACCEPT_CHARSET_VALUE, ACCEPT_ENCODING_VALUE, ACCEPT_LANGUAGE_VALUE, ACCEPT_VALUE,
    CONNECTION_VALUE, RANGE_VALUE,
};
use crate::error_handling::InitializationError;

/// Immutable settings for resolution requests.
///
/// Holds the header set sent with every request, the per-request timeout and
/// the redirect cap.
///
/// # Header set
///
/// - **User-Agent**: desktop browser string (configurable)
/// - **Accept / Accept-Charset / Accept-Language**: browser-like negotiation
/// - **Accept-Encoding: none**: no compressed bodies
/// - **Connection: keep-alive**
/// - **Range: bytes=0-50**: discourages a full body transfer if a server
///   answers the HEAD with content anyway
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    headers: HeaderMap,
    timeout: Duration,
    max_redirects: usize,
}

impl ResolverSettings {
    /// Builds settings from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidHeader` if `user_agent` is not a
    /// valid header value (control characters, for instance).
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        max_redirects: usize,
    ) -> Result<Self, InitializationError> {
        Ok(Self {
            headers: build_headers(user_agent)?,
            timeout,
            max_redirects,
        })
    }

    /// Builds settings from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Self::new(&config.user_agent, config.timeout, config.max_redirects)
    }

    /// Header set sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Whole-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Redirect hop cap.
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Applies the header set to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder.headers(self.headers.clone())
    }
}

fn build_headers(user_agent: &str) -> Result<HeaderMap, InitializationError> {
    let user_agent =
        HeaderValue::from_str(user_agent).map_err(|e| InitializationError::InvalidHeader {
            name: "user-agent",
            reason: e.to_string(),
        })?;

    let fixed: [(HeaderName, &'static str); 6] = [
        (header::ACCEPT, ACCEPT_VALUE),
        (header::ACCEPT_CHARSET, ACCEPT_CHARSET_VALUE),
        (header::ACCEPT_ENCODING, ACCEPT_ENCODING_VALUE),
        (header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE),
        (header::CONNECTION, CONNECTION_VALUE),
        (header::RANGE, RANGE_VALUE),
    ];

    let mut headers = HeaderMap::with_capacity(fixed.len() + 1);
    headers.insert(header::USER_AGENT, user_agent);
    for (name, value) in fixed {
        headers.insert(name, HeaderValue::from_static(value));
    }
    Ok(headers)
}
