//! Heuristic redirect following.
//!
//! Redirects are detected from a `Location` header or, failing that, from a
//! URL-shaped query parameter value in the resolved response URI (for example
//! `?continue=https://example.com/next`). The loop stops as soon as a hop
//! yields no new location.

use std::future::Future;
use std::pin::Pin;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use reqwest::header::LOCATION;
use reqwest::Url;

use super::execute::execute_with_headers;
use super::policy::RetryPolicy;
use super::request::Request;
use super::response::Response;
use super::transport::Transport;

/// URL-shaped text: `http(s)://host.tld...` or `www.host.tld...`.
///
/// Matches must also pass `passes_www_guard`, which stands in for a
/// lookahead the `regex` crate does not support.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"https?://(?:www\.)?[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.[^\s]{2,}",
        r"|www\.[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.[^\s]{2,}",
        r"|https?://(?:www\.)?[a-zA-Z0-9]+\.[^\s]{2,}",
        r"|www\.[a-zA-Z0-9]+\.[^\s]{2,}",
    ))
    .expect("URL pattern is a valid regex")
});

/// A scheme-prefixed host that starts with `www` must continue with `www.`,
/// so `https://wwwfoo.com` is not a URL but `https://www.foo.com` is.
fn passes_www_guard(candidate: &str) -> bool {
    match candidate.split_once("://") {
        Some((_, host)) => !host.starts_with("www") || host.starts_with("www."),
        None => true,
    }
}

/// Returns the leftmost URL-shaped substring of `text`.
///
/// A match rejected by `passes_www_guard` is skipped and scanning resumes
/// one character after its start.
fn find_url(text: &str) -> Option<&str> {
    let mut start = 0;
    while let Some(m) = URL_PATTERN.find_at(text, start) {
        if passes_www_guard(m.as_str()) {
            return Some(m.as_str());
        }
        start = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// The most recently followed redirect target.
///
/// Only the immediately preceding location is remembered, so a chain that
/// alternates between two locations is not detected.
#[derive(Debug, Default, Clone)]
pub struct RedirectState {
    last_location: Option<Url>,
}

impl RedirectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_location(&self) -> Option<&Url> {
        self.last_location.as_ref()
    }

    /// Records `candidate` and returns `true` if it differs from the last
    /// followed location.
    pub fn advance(&mut self, candidate: &Url) -> bool {
        if self.last_location.as_ref() == Some(candidate) {
            return false;
        }
        self.last_location = Some(candidate.clone());
        true
    }
}

/// Extracts the next location signalled by `response`.
///
/// Returns `None` when the response has no resolved URI. A non-empty
/// `Location` header wins; otherwise the decoded query values of the resolved
/// URI are scanned in order and the first URL-shaped match is returned.
pub fn location_from_response(response: &Response) -> Option<String> {
    let resolved = response.url()?;

    let header = response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty());
    if let Some(location) = header {
        return Some(location.to_string());
    }

    resolved
        .query_pairs()
        .find_map(|(_, value)| find_url(&value).map(str::to_string))
}

/// Resolves a location candidate against the URI it was found on.
///
/// `www.` candidates take the scheme of `base`; relative references are
/// joined onto `base`. Returns `None` for anything that does not produce an
/// http(s) URL.
pub fn resolve_location(base: &Url, candidate: &str) -> Option<Url> {
    let schemeless = candidate
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("www."));

    let parsed = if schemeless {
        Url::parse(&format!("{}://{candidate}", base.scheme()))
    } else {
        match Url::parse(candidate) {
            Err(url::ParseError::RelativeUrlWithoutBase) => base.join(candidate),
            other => other,
        }
    };

    match parsed {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            debug!("Ignoring redirect to non-HTTP location {url}");
            None
        }
        Err(e) => {
            debug!("Ignoring unparsable redirect location {candidate:?}: {e}");
            None
        }
    }
}

/// Executes `request` and follows redirects until no new location appears.
///
/// Equivalent to `follow_redirects(transport, request, policy, false)`.
pub async fn execute_with_redirects<T: Transport>(
    transport: &T,
    request: Request,
    policy: &RetryPolicy,
) -> Response {
    follow_redirects(transport, request, policy, false).await
}

/// Redirect-following loop.
///
/// Each hop runs through `execute_with_headers` and its body is dropped. When
/// a hop yields no new location and `ignore_next_redirects` is false, the
/// resolved URI is fetched again through a nested resolver with
/// `ignore_next_redirects` set; its result is returned only if it stays on the
/// same host as the current response.
pub fn follow_redirects<'a, T: Transport + 'a>(
    transport: &'a T,
    request: Request,
    policy: &'a RetryPolicy,
    ignore_next_redirects: bool,
) -> Pin<Box<dyn Future<Output = Response> + Send + 'a>> {
    Box::pin(async move {
        let mut request = request;
        let mut state = RedirectState::new();

        loop {
            let mut response = execute_with_headers(transport, request, policy).await;
            response.discard_body();

            let next = response.url().and_then(|resolved| {
                location_from_response(&response)
                    .and_then(|candidate| resolve_location(resolved, &candidate))
            });

            if let Some(next) = next {
                if state.advance(&next) {
                    debug!("Following redirect to {next}");
                    request = Request::get(next);
                    continue;
                }
                debug!("Redirect to {next} repeats the previous hop");
            }

            if let (Some(resolved), false) = (response.url(), ignore_next_redirects) {
                let nested =
                    follow_redirects(transport, Request::get(resolved.clone()), policy, true)
                        .await;
                if nested.host() == response.host() {
                    return nested;
                }
                debug!(
                    "Nested redirect left {} for {}, keeping original response",
                    response.host().unwrap_or_default(),
                    nested.host().unwrap_or("<no host>")
                );
            }

            return response;
        }
    })
}
