//! Error handling.
//!
//! This module provides:
//! - Error type definitions for request execution and initialization
//! - Error categorization for logging
//! - Retry strategy configuration

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy};
pub use types::{ErrorType, FetchError, InitializationError};
