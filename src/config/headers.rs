//! HTTP header constants.
//!
//! Browser-like request headers attached to every header-augmented execution,
//! plus the AJAX marker used for the single fallback attempt.

/// Accept header sent with every request.
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
/// Accept-Language header sent with every request.
pub const BROWSER_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.8,en-US;q=0.5,en;q=0.3";
/// Connection header sent with every request.
pub const BROWSER_CONNECTION: &str = "keep-alive";
/// Accept-Encoding header sent with every request.
pub const BROWSER_ACCEPT_ENCODING: &str = "gzip";
/// TE header sent with every request.
pub const BROWSER_TE: &str = "Trailers";

/// Header added when the first attempt produced no HTTP status.
pub const HEADER_X_REQUESTED_WITH: &str = "x-requested-with";
/// Value of the AJAX marker header.
pub const X_REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Browser headers as (name, value) pairs, in the order they are attached.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", BROWSER_ACCEPT),
    ("accept-language", BROWSER_ACCEPT_LANGUAGE),
    ("connection", BROWSER_CONNECTION),
    ("accept-encoding", BROWSER_ACCEPT_ENCODING),
    ("te", BROWSER_TE),
];
