//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, retry defaults, etc.)
//! - Browser header constants
//! - Library and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Opt, RetryConfig};
