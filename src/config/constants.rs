//! Configuration constants.
//!
//! Defaults for every tunable of a run. The CLI exposes each of these as an
//! option whose default is the value below.

use std::time::Duration;

/// Per-request timeout, covering connect, TLS and the response head.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Pause enforced between requests so bulk runs stay below abuse thresholds.
pub const REQUEST_DELAY: Duration = Duration::from_millis(200);

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Number of URLs resolved at once. 1 keeps the run strictly sequential.
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Input list read when no path is given.
pub const DEFAULT_DOMAINS_FILE: &str = "domains.txt";
/// Resolved URLs file.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";
/// Error lines file.
pub const DEFAULT_ERRORS_FILE: &str = "errors.txt";

/// Scheme prepended to inputs that carry none.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Default User-Agent string for HTTP requests.
///
/// A desktop Chrome string. Some hosts answer HEAD requests from unknown
/// agents with 403, so a browser-like value keeps more of them resolvable.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.11 (KHTML, like Gecko) Chrome/23.0.1271.64 Safari/537.11";
