//! Error retriability.

use crate::error_handling::FetchError;

/// Determines if an error is retriable (should be retried).
///
/// # Retriable Errors
///
/// - Network timeouts (`reqwest::Error::is_timeout()`, `FetchError::Timeout`)
/// - Connection failures (`reqwest::Error::is_connect()`, `FetchError::Connection`)
/// - Request errors (`reqwest::Error::is_request()`)
///
/// # Non-Retriable Errors
///
/// - URL parsing errors and request builder errors
/// - Header encoding errors
/// - Redirect and decode errors
/// - JSON errors
///
/// HTTP error statuses never reach this function: they are responses, not
/// failures, and are returned to the caller as is.
pub(crate) fn is_retriable_error(error: &FetchError) -> bool {
    match error {
        FetchError::Transport(reqwest_err) => {
            // Network-related errors are retriable; unknown ones might be transient too
            !(reqwest_err.is_redirect() || reqwest_err.is_decode() || reqwest_err.is_builder())
        }
        FetchError::Connection(_) | FetchError::Timeout(_) => true,
        FetchError::InvalidUrl(_) | FetchError::InvalidHeader(_) | FetchError::Json(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_is_retriable_error_connection() {
        let err = FetchError::Connection("Connection refused".into());
        assert!(is_retriable_error(&err));
    }

    #[test]
    fn test_is_retriable_error_timeout() {
        let err = FetchError::Timeout(Duration::from_secs(10));
        assert!(is_retriable_error(&err));
    }

    #[test]
    fn test_is_retriable_error_url_parse() {
        let err: FetchError = url::ParseError::EmptyHost.into();
        assert!(!is_retriable_error(&err), "URL parse error should not be retriable");
    }

    #[test]
    fn test_is_retriable_error_invalid_header() {
        let err = FetchError::InvalidHeader("bad\nvalue".into());
        assert!(!is_retriable_error(&err));
    }

    #[test]
    fn test_is_retriable_error_json() {
        let err: FetchError = serde_json::from_str::<u8>("{").unwrap_err().into();
        assert!(!is_retriable_error(&err));
    }

    #[tokio::test]
    async fn test_is_retriable_error_connect_refused() {
        // Port 1 is reserved and nothing listens there in test environments
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(500))
            .build()
            .expect("Failed to create HTTP client");
        let err = client
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("connection to port 1 should fail");
        assert!(is_retriable_error(&FetchError::Transport(err)));
    }

    #[tokio::test]
    async fn test_is_retriable_error_builder() {
        let err = reqwest::Client::new()
            .get("http://[::1")
            .send()
            .await
            .expect_err("malformed URL should not be sent");
        assert!(!is_retriable_error(&FetchError::Transport(err)));
    }
}
