//! URL resolution.
//!
//! One resolution is one HEAD request: the client follows redirects under the
//! configured policy and the final URL it lands on is the result. Every
//! failure along the way is classified into exactly one `ErrorKind`.

mod redirects;
mod request;

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::error_handling::{
    categorize_parse_error, categorize_reqwest_error, describe_error, ErrorKind,
    InitializationError, ResolutionError,
};
use crate::initialization::init_client;

pub use redirects::{redirect_policy, RedirectError};
pub use request::ResolverSettings;

/// Resolves one normalized URL to its final destination.
///
/// Implementations perform at most one network round trip per call and never
/// retry. The engine only depends on this trait, so tests can substitute a
/// resolver that never touches the network.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Returns the final URL with trailing slashes stripped, or the classified
    /// failure.
    async fn resolve(&self, url: &str) -> Result<String, ResolutionError>;
}

/// Resolver backed by a `reqwest::Client`.
#[derive(Clone)]
pub struct HttpResolver {
    client: reqwest::Client,
    settings: Arc<ResolverSettings>,
}

impl HttpResolver {
    /// Builds the HTTP client from `settings` and wraps both.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the client cannot be built.
    pub fn new(settings: ResolverSettings) -> Result<Self, InitializationError> {
        let client = init_client(&settings)?;
        Ok(Self::with_client(client, settings))
    }

    /// Uses an already-built client. The client is expected to carry the
    /// timeout and redirect policy from `init_client`.
    pub fn with_client(client: reqwest::Client, settings: ResolverSettings) -> Self {
        Self {
            client,
            settings: Arc::new(settings),
        }
    }

    /// Settings applied to every request.
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }
}

#[async_trait]
impl Resolve for HttpResolver {
    async fn resolve(&self, url: &str) -> Result<String, ResolutionError> {
        let target = parse_target(url)?;

        let response = self
            .settings
            .apply_to_request_builder(self.client.head(target))
            .send()
            .await
            .map_err(|e| classify_reqwest_error(url, e))?;

        // 4xx/5xx count as failures: the host answered but the URL is not live.
        let response = response
            .error_for_status()
            .map_err(|e| classify_reqwest_error(url, e))?;

        // A 3xx the redirect policy could not follow (no Location, 300, 304).
        let status = response.status();
        if !status.is_success() {
            return Err(ResolutionError::new(
                ErrorKind::Broken,
                url,
                format!("HTTP status without a followable redirect ({status})"),
            ));
        }

        Ok(strip_trailing_slash(response.url().as_str()).to_string())
    }
}

/// Parses a normalized URL, rejecting anything the client could not dispatch.
fn parse_target(url: &str) -> Result<Url, ResolutionError> {
    let parsed = Url::parse(url)
        .map_err(|e| ResolutionError::new(categorize_parse_error(&e), url, e.to_string()))?;

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ResolutionError::new(
            ErrorKind::InvalidUrl,
            url,
            "no host specified",
        ));
    }

    Ok(parsed)
}

fn classify_reqwest_error(url: &str, error: reqwest::Error) -> ResolutionError {
    let kind = categorize_reqwest_error(&error);
    // The URL is already part of the error line; drop reqwest's copy of it.
    let error = error.without_url();
    ResolutionError::new(kind, url, describe_error(&error))
}

/// Strips every trailing `/` from a resolved URL.
pub fn strip_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}
