//! Error type definitions.
//!
//! This module defines the error types returned by transports and by
//! initialization, and the categories used when logging failures.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of a single request execution.
///
/// Transports return this as the `Err` side of an execution; the execution
/// helpers never propagate it and instead store it on the `Response`.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Transport(#[from] ReqwestError),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header name or value could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Connection-level failure reported by a transport without a reqwest error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Response body was not valid JSON for the requested type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Categorizes this error for logging and statistics.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FetchError::Transport(e) => super::categorize_reqwest_error(e),
            FetchError::InvalidUrl(_) => ErrorType::InvalidUrlError,
            FetchError::InvalidHeader(_) => ErrorType::InvalidHeaderError,
            FetchError::Connection(_) => ErrorType::HttpRequestConnectError,
            FetchError::Timeout(_) => ErrorType::HttpRequestTimeoutError,
            FetchError::Json(_) => ErrorType::JsonDecodeError,
        }
    }
}

/// Types of errors that can occur while executing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Local errors
    InvalidUrlError,
    InvalidHeaderError,
    JsonDecodeError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::InvalidUrlError => "Invalid URL",
            ErrorType::InvalidHeaderError => "Invalid header",
            ErrorType::JsonDecodeError => "JSON decode error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
        assert_eq!(ErrorType::InvalidUrlError.to_string(), "Invalid URL");
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            let str_repr = error_type.as_str();
            assert!(
                !str_repr.is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_fetch_error_categories() {
        let parse: FetchError = url::ParseError::EmptyHost.into();
        assert_eq!(parse.error_type(), ErrorType::InvalidUrlError);

        let conn = FetchError::Connection("refused".into());
        assert_eq!(conn.error_type(), ErrorType::HttpRequestConnectError);

        let timeout = FetchError::Timeout(Duration::from_secs(1));
        assert_eq!(timeout.error_type(), ErrorType::HttpRequestTimeoutError);
        assert!(timeout.to_string().contains("timed out"));
    }

    #[test]
    fn test_fetch_error_json_from_serde() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let fetch: FetchError = err.into();
        assert_eq!(fetch.error_type(), ErrorType::JsonDecodeError);
    }
}
