//! Request transports.
//!
//! `Transport` is the seam between the execution helpers and the HTTP client.
//! `HttpTransport` implements it on top of `reqwest`.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::HeaderValue;
use reqwest::Url;

use super::request::Request;
use super::response::{extract_response, Response};
use crate::error_handling::FetchError;

/// Executes requests and owns the cookie store used for them.
pub trait Transport: Send + Sync {
    /// Sends `request` once. Retrying is the caller's concern.
    ///
    /// HTTP error statuses are successful executions; `Err` means no response
    /// was obtained.
    fn execute(
        &self,
        request: &Request,
    ) -> impl Future<Output = Result<Response, FetchError>> + Send;

    /// Drops all cookies collected so far.
    fn reset_cookies(&self);
}

/// A `reqwest` cookie store that can be emptied while the client keeps using it.
///
/// `reqwest::Client` holds its cookie provider for its whole lifetime, so the
/// jar is swapped out behind a lock instead of rebuilding the client.
#[derive(Debug, Default)]
pub struct ResettableCookieJar {
    inner: RwLock<Jar>,
}

impl ResettableCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the jar with an empty one.
    pub fn reset(&self) {
        let mut jar = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *jar = Jar::default();
    }
}

impl CookieStore for ResettableCookieJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .set_cookies(cookie_headers, url);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .cookies(url)
    }
}

/// `Transport` backed by a `reqwest::Client`.
///
/// Built by `initialization::init_transport`, which wires the shared
/// `ResettableCookieJar` into the client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    cookies: Arc<ResettableCookieJar>,
}

impl HttpTransport {
    /// Wraps `client`. `cookies` must be the provider the client was built with
    /// for `reset_cookies` to have any effect.
    pub fn new(client: reqwest::Client, cookies: Arc<ResettableCookieJar>) -> Self {
        Self { client, cookies }
    }

    fn build(&self, request: &Request) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(request.method().clone(), request.url().clone())
            .headers(request.headers().clone());

        let params = request.params();
        if !params.is_empty() {
            builder = if request.params_in_query() {
                builder.query(params)
            } else {
                builder.form(params)
            };
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }
        builder
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: &Request) -> Result<Response, FetchError> {
        let resp = self.build(request).send().await?;
        Ok(extract_response(resp).await)
    }

    fn reset_cookies(&self) {
        self.cookies.reset();
    }
}
