//! Response data structures.

use reqwest::header::HeaderMap;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::HTTP_STATUS_NONE;
use crate::error_handling::FetchError;

/// Outcome of one request execution.
///
/// Failures that happened before any HTTP status was received are carried in
/// `error` with `status` left at `HTTP_STATUS_NONE` (0), so callers handle
/// success and failure through the same shape.
#[derive(Debug)]
pub struct Response {
    status: u16,
    headers: HeaderMap,
    url: Option<Url>,
    body: Option<String>,
    error: Option<FetchError>,
}

impl Response {
    /// A response with `status` whose transport resolved to `url`.
    pub fn new(status: u16, url: Url) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            url: Some(url),
            body: None,
            error: None,
        }
    }

    /// A response synthesized from a failure: no status, headers, or resolved URI.
    pub fn from_failure(error: FetchError) -> Self {
        Self {
            status: HTTP_STATUS_NONE,
            headers: HeaderMap::new(),
            url: None,
            body: None,
            error: Some(error),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_error(mut self, error: FetchError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// `false` when no HTTP status was obtained (connection-level failure).
    pub fn has_status(&self) -> bool {
        self.status != HTTP_STATUS_NONE
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The URI the transport reports as the final location of this hop.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Host of the resolved URI.
    pub fn host(&self) -> Option<&str> {
        self.url.as_ref().and_then(|u| u.host_str())
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Drops the response body.
    pub fn discard_body(&mut self) {
        self.body = None;
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Json` if there is no body or it does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_str(self.body.as_deref().unwrap_or_default())?)
    }

    pub(crate) fn set_error_if_absent(&mut self, error: FetchError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

/// A response together with its deserialized JSON body.
#[derive(Debug)]
pub struct TypedResponse<T> {
    /// The response; `error` holds a decode failure if deserialization failed.
    pub response: Response,
    /// The deserialized body, if the request succeeded and the body matched `T`.
    pub data: Option<T>,
}
