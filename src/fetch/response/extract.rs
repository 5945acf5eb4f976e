//! Conversion of `reqwest` responses.

use log::debug;

use super::types::Response;
use crate::error_handling::FetchError;

/// Reads a `reqwest::Response` into a `Response`.
///
/// Status, headers and the resolved URL are always kept. If the body cannot
/// be read, the failure is attached to the response instead of being returned,
/// since the status and headers are still meaningful.
pub(crate) async fn extract_response(resp: reqwest::Response) -> Response {
    let status = resp.status().as_u16();
    let headers = resp.headers().clone();
    let final_url = resp.url().clone();

    let response = Response::new(status, final_url).with_headers(headers);
    match resp.text().await {
        Ok(body) => response.with_body(body),
        Err(e) => {
            debug!("Failed to read response body: {e}");
            response.with_error(FetchError::Transport(e))
        }
    }
}
