//! Request header values.
//!
//! The fixed header set sent with every resolution request. `User-Agent` is
//! configurable and lives in `Config`; everything else is constant.

/// Accept header (browser document negotiation)
pub const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
/// Accept-Charset header
pub const ACCEPT_CHARSET_VALUE: &str = "utf-8;q=0.7,*;q=0.3";
/// Accept-Encoding header. `none` asks the server not to compress anything.
pub const ACCEPT_ENCODING_VALUE: &str = "none";
/// Accept-Language header
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.8";
/// Connection header
pub const CONNECTION_VALUE: &str = "keep-alive";
/// Range header. Asks for the first 51 bytes only, in case a server answers
/// the HEAD with a body anyway.
pub const RANGE_VALUE: &str = "bytes=0-50";
