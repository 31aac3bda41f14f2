//! HTTP client initialization.
//!
//! This module builds the `reqwest::Client` used for resolution requests.

use crate::error_handling::InitializationError;
use crate::resolve::{redirect_policy, ResolverSettings};
use reqwest::ClientBuilder;

/// Initializes the HTTP client for resolution requests.
///
/// Creates a `reqwest::Client` configured with:
/// - Overall request timeout and connect timeout from the settings
/// - Redirect following under an explicit hop cap with loop detection
///
/// Request headers are not installed as client defaults: the resolver applies
/// its header set to every request explicitly.
///
/// # Arguments
///
/// * `settings` - Resolver settings holding the timeout and redirect cap
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(settings: &ResolverSettings) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(settings.timeout())
        .connect_timeout(settings.timeout())
        .redirect(redirect_policy(settings.max_redirects()))
        .build()?;
    Ok(client)
}
