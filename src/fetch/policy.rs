//! Retry policy with execute-and-capture semantics.

use std::future::Future;

use log::debug;
use tokio_retry::RetryIf;

use crate::config::RetryConfig;
use crate::error_handling::{get_retry_strategy, FetchError};
use crate::utils::is_retriable_error;

/// Result of running an operation through a `RetryPolicy`.
#[derive(Debug)]
pub enum PolicyOutcome<T> {
    /// The operation succeeded, possibly after retries.
    Completed(T),
    /// The final failure, once retries were exhausted or the error was not retriable.
    Failed(FetchError),
}

impl<T> PolicyOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, PolicyOutcome::Completed(_))
    }

    pub fn into_result(self) -> Result<T, FetchError> {
        match self {
            PolicyOutcome::Completed(value) => Ok(value),
            PolicyOutcome::Failed(error) => Err(error),
        }
    }
}

/// Exponential-backoff retry policy for request execution.
///
/// Only errors classified as transient by `is_retriable_error` are retried.
/// The policy never returns an error directly: the final failure is captured
/// in `PolicyOutcome::Failed`.
#[derive(Debug, Clone, Default)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// A policy that makes exactly one attempt.
    pub fn none() -> Self {
        Self::new(RetryConfig::none())
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Runs `operation`, retrying transient failures, and captures the outcome.
    pub async fn execute_and_capture<T, F, Fut>(&self, mut operation: F) -> PolicyOutcome<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempts: u32 = 0;
        let result = RetryIf::spawn(
            get_retry_strategy(&self.config),
            || {
                attempts += 1;
                operation()
            },
            |e: &FetchError| {
                let retriable = is_retriable_error(e);
                if retriable {
                    debug!("Retriable failure ({}): {e}", e.error_type());
                }
                retriable
            },
        )
        .await;

        match result {
            Ok(value) => PolicyOutcome::Completed(value),
            Err(e) => {
                debug!("Giving up after {attempts} attempt(s): {e}");
                PolicyOutcome::Failed(e)
            }
        }
    }
}
