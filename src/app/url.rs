//! Input line normalization.

use crate::config::DEFAULT_SCHEME_PREFIX;

/// Turns a raw input line into a URL candidate.
///
/// Trims surrounding whitespace, prepends `http://` when the text does not
/// contain `http` anywhere, and removes every `"` character. No validation is
/// done here: malformed results are classified when they are resolved.
///
/// The `http` check is a plain substring test, so `httpbin.org` is passed
/// through without a scheme and later fails as an invalid URL. An empty line
/// becomes `http://`.
///
/// # Arguments
///
/// * `raw` - One line of the input file
pub fn normalize_domain(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.contains("http") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };
    with_scheme.replace('"', "")
}
