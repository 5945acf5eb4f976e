//! Configuration constants.
//!
//! This module defines the constants used throughout the crate, including
//! timeouts, retry defaults, and redirect limits.

// Network operation timeouts
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via `Config::user_agent` or the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Redirect handling
/// Maximum number of redirect hops the transport follows on its own before
/// handing the response back to the resolver.
pub const MAX_TRANSPORT_REDIRECT_HOPS: usize = 10;

// Retry strategy
/// Base retry delay in milliseconds (first retry waits this times `RETRY_FACTOR`)
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum number of retries after the initial attempt
pub const RETRY_MAX_RETRIES: usize = 2;

// HTTP status codes (for clarity and consistency)
/// Status reported when no HTTP status was obtained (connection-level failure).
pub const HTTP_STATUS_NONE: u16 = 0;
