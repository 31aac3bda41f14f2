//! Redirect policy.
//!
//! The client follows redirects itself; this module states the rules it
//! follows them by.

use reqwest::redirect::Policy;
use thiserror::Error;

/// Reasons a redirect chain is abandoned.
#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("too many redirects (limit {0})")]
    TooMany(usize),

    #[error("redirect loop back to {0}")]
    Loop(String),
}

/// Builds the redirect policy for resolution requests.
///
/// - Follows up to `max_hops` redirects, across origins
/// - Stops with an error on the first hop past the cap
/// - Stops with an error when a hop targets a URL already visited in the chain
///
/// Either error surfaces as a redirect error from reqwest and is classified
/// `Broken`.
pub fn redirect_policy(max_hops: usize) -> Policy {
    Policy::custom(move |attempt| {
        // `previous` holds the starting URL and every hop followed so far.
        if attempt.previous().len() > max_hops {
            let err = RedirectError::TooMany(max_hops);
            attempt.error(err)
        } else if attempt.previous().iter().any(|seen| seen == attempt.url()) {
            let err = RedirectError::Loop(attempt.url().to_string());
            attempt.error(err)
        } else {
            attempt.follow()
        }
    })
}
