//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize errors and configure retry strategies.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::ErrorType;
use crate::config::RetryConfig;

/// Creates an exponential backoff retry strategy.
///
/// Yields one delay per retry: `initial_delay_ms * factor^n` for the n-th
/// retry (starting at 1), capped at `max_delay`. The iterator is limited to
/// `max_retries` items, so the total number of attempts is `max_retries + 1`.
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::RetryIf`.
pub fn get_retry_strategy(config: &RetryConfig) -> impl Iterator<Item = Duration> {
    // ExponentialBackoff yields `factor * base^n`; its base is our growth
    // factor and its factor is our initial delay.
    ExponentialBackoff::from_millis(config.factor)
        .factor(config.initial_delay_ms)
        .max_delay(config.max_delay)
        .take(config.max_retries)
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Transports never call `error_for_status`, so errors carry no HTTP status
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}
