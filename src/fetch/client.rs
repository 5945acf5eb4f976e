//! Transport and retry policy bundled behind one handle.

use serde::de::DeserializeOwned;

use super::execute::{execute_json_with_policy, execute_with_headers, execute_with_policy};
use super::policy::RetryPolicy;
use super::redirects::execute_with_redirects;
use super::request::Request;
use super::response::{Response, TypedResponse};
use super::transport::{HttpTransport, Transport};
use crate::config::Config;
use crate::error_handling::{FetchError, InitializationError};
use crate::initialization::init_transport;

/// A transport paired with the retry policy used for every call.
///
/// # Examples
///
/// ```no_run
/// use redirect_resolver::{Config, RedirectClient};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RedirectClient::from_config(&Config::default())?;
/// let response = client.resolve("https://example.com/login?next=https://example.org/").await?;
/// println!("{:?} ({})", response.url(), response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RedirectClient<T = HttpTransport> {
    transport: T,
    policy: RetryPolicy,
}

impl RedirectClient<HttpTransport> {
    /// Builds a `reqwest`-backed client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(
            init_transport(config)?,
            RetryPolicy::new(config.retry.clone()),
        ))
    }
}

impl<T: Transport> RedirectClient<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// See [`execute_with_policy`].
    pub async fn execute(&self, request: &Request) -> Response {
        execute_with_policy(&self.transport, request, &self.policy).await
    }

    /// See [`execute_json_with_policy`].
    pub async fn execute_json<D: DeserializeOwned>(&self, request: &Request) -> TypedResponse<D> {
        execute_json_with_policy(&self.transport, request, &self.policy).await
    }

    /// See [`execute_with_headers`].
    pub async fn execute_with_headers(&self, request: Request) -> Response {
        execute_with_headers(&self.transport, request, &self.policy).await
    }

    /// See [`execute_with_redirects`].
    pub async fn execute_with_redirects(&self, request: Request) -> Response {
        execute_with_redirects(&self.transport, request, &self.policy).await
    }

    /// Follows redirects starting from a `GET` of `url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if `url` is not an absolute URL.
    /// Request failures are reported on the returned `Response`.
    pub async fn resolve(&self, url: &str) -> Result<Response, FetchError> {
        let request = Request::parse(reqwest::Method::GET, url)?;
        Ok(self.execute_with_redirects(request).await)
    }
}
