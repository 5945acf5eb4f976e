//! HTTP request model and browser header injection.
//!
//! This module provides the `Request` type passed to transports and the
//! browser-like header set attached before every header-augmented execution.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};

use crate::config::{BROWSER_HEADERS, HEADER_X_REQUESTED_WITH, X_REQUESTED_WITH_VALUE};
use crate::error_handling::FetchError;

/// Realistic browser request headers.
///
/// Some sites answer differently (or not at all) when a request does not look
/// like it came from a browser. The set mimics a desktop browser's navigation
/// request and is attached before every execution in `execute_with_headers`.
pub struct BrowserHeaders;

impl BrowserHeaders {
    /// Returns headers as a vector of (name, value) tuples.
    pub fn as_vec() -> Vec<(String, String)> {
        BROWSER_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    /// Inserts the browser headers into `headers`, replacing existing values
    /// with the same names.
    pub fn apply(headers: &mut HeaderMap) {
        for (name, value) in BROWSER_HEADERS {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
    }
}

/// A request to be executed by a `Transport`.
///
/// A fresh `Request` is built for every redirect hop via `Request::get`.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    params: Vec<(String, String)>,
    body: Option<String>,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            params: Vec::new(),
            body: None,
        }
    }

    /// A plain `GET` request for `url`.
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Parses `url` and builds a request for it.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if `url` is not an absolute URL.
    pub fn parse(method: Method, url: &str) -> Result<Self, FetchError> {
        Ok(Self::new(method, Url::parse(url)?))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Sets header `name` to `value`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidHeader` if the name or value cannot be
    /// represented in an HTTP header.
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<&mut Self, FetchError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| FetchError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| FetchError::InvalidHeader(format!("{name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Appends a request parameter. Parameters keep their insertion order.
    pub fn add_param(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Sets a raw request body. Parameters then travel in the query string.
    pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    /// Whether parameters go into the query string rather than a form body.
    pub fn params_in_query(&self) -> bool {
        self.body.is_some()
            || matches!(
                self.method,
                Method::GET | Method::HEAD | Method::DELETE | Method::OPTIONS
            )
    }

    pub(crate) fn apply_browser_headers(&mut self) {
        BrowserHeaders::apply(&mut self.headers);
    }

    /// Marks the request as an AJAX request (`X-Requested-With: XMLHttpRequest`).
    pub(crate) fn mark_as_xhr(&mut self) {
        self.headers.insert(
            HeaderName::from_static(HEADER_X_REQUESTED_WITH),
            HeaderValue::from_static(X_REQUESTED_WITH_VALUE),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("test URL should parse")
    }

    #[test]
    fn test_browser_headers_as_vec() {
        let headers = BrowserHeaders::as_vec();
        assert_eq!(headers.len(), 5);
        assert!(headers
            .iter()
            .any(|(n, v)| n == "accept-language" && v.starts_with("ru-RU")));
        assert!(headers.iter().any(|(n, v)| n == "te" && v == "Trailers"));
    }

    #[test]
    fn test_apply_browser_headers_is_idempotent() {
        let mut request = Request::get(url("https://example.com/"));
        request.apply_browser_headers();
        request.apply_browser_headers();

        let headers = request.headers();
        assert_eq!(headers.len(), 5);
        assert_eq!(headers.get("accept-encoding").unwrap(), "gzip");
        assert_eq!(headers.get("connection").unwrap(), "keep-alive");
        assert_eq!(
            headers.get("accept").unwrap(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
        );
    }

    #[test]
    fn test_mark_as_xhr() {
        let mut request = Request::get(url("https://example.com/"));
        assert!(request.headers().get("x-requested-with").is_none());
        request.mark_as_xhr();
        assert_eq!(
            request.headers().get("X-Requested-With").unwrap(),
            "XMLHttpRequest"
        );
    }

    #[test]
    fn test_add_header_rejects_invalid_value() {
        let mut request = Request::get(url("https://example.com/"));
        let err = request.add_header("X-Test", "line\nbreak").unwrap_err();
        assert!(matches!(err, FetchError::InvalidHeader(_)));

        request.add_header("X-Test", "ok").unwrap();
        assert_eq!(request.headers().get("x-test").unwrap(), "ok");
    }

    #[test]
    fn test_parse_rejects_relative_url() {
        let err = Request::parse(Method::GET, "/relative/path").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_params_keep_order() {
        let mut request = Request::new(Method::POST, url("https://example.com/form"));
        request.add_param("b", "2").add_param("a", "1");
        assert_eq!(
            request.params(),
            &[("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
        );
    }

    #[test]
    fn test_params_in_query() {
        assert!(Request::get(url("https://example.com/")).params_in_query());

        let mut post = Request::new(Method::POST, url("https://example.com/"));
        assert!(!post.params_in_query());
        post.set_body("{}");
        assert!(post.params_in_query());
    }
}
