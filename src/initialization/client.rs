//! HTTP transport initialization.

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::fetch::{HttpTransport, ResettableCookieJar};

/// Builds the `reqwest`-backed transport described by `config`.
///
/// The client gets:
/// - the configured user agent and request timeout
/// - a `ResettableCookieJar` shared with the returned transport
/// - gzip response decoding, matching the `Accept-Encoding: gzip` browser header
/// - transport-level redirects limited to `max_transport_redirects`, or none
///   when `follow_transport_redirects` is off
/// - certificate and hostname checks disabled only when `insecure_skip_verify` is set
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_transport(config: &Config) -> Result<HttpTransport, InitializationError> {
    let cookies = Arc::new(ResettableCookieJar::new());

    let redirect_policy = if config.follow_transport_redirects {
        Policy::limited(config.max_transport_redirects)
    } else {
        Policy::none()
    };

    if config.insecure_skip_verify {
        warn!("TLS certificate verification is disabled");
    }

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .cookie_provider(Arc::clone(&cookies))
        .gzip(true)
        .redirect(redirect_policy)
        .danger_accept_invalid_certs(config.insecure_skip_verify)
        .danger_accept_invalid_hostnames(config.insecure_skip_verify)
        .build()?;

    Ok(HttpTransport::new(client, cookies))
}
