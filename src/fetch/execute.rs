//! Policy-wrapped and header-augmented request execution.

use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::policy::{PolicyOutcome, RetryPolicy};
use super::request::Request;
use super::response::{Response, TypedResponse};
use super::transport::Transport;

/// Executes `request` through `policy`.
///
/// Never fails: when the policy gives up, the captured error is returned as a
/// `Response` with status 0 and no resolved URI.
pub async fn execute_with_policy<T: Transport>(
    transport: &T,
    request: &Request,
    policy: &RetryPolicy,
) -> Response {
    match policy
        .execute_and_capture(move || transport.execute(request))
        .await
    {
        PolicyOutcome::Completed(response) => response,
        PolicyOutcome::Failed(error) => {
            debug!("Request to {} failed: {error}", request.url());
            Response::from_failure(error)
        }
    }
}

/// Executes `request` through `policy` and deserializes a successful JSON body.
///
/// `data` is only populated for 2xx responses with a non-empty body. A body
/// that does not match `D` leaves `data` empty and records the decode error on
/// the response unless it already carries one.
pub async fn execute_json_with_policy<D, T>(
    transport: &T,
    request: &Request,
    policy: &RetryPolicy,
) -> TypedResponse<D>
where
    D: DeserializeOwned,
    T: Transport,
{
    let mut response = execute_with_policy(transport, request, policy).await;

    let has_body = response.body().is_some_and(|b| !b.is_empty());
    let data = if response.is_success() && has_body {
        match response.json::<D>() {
            Ok(data) => Some(data),
            Err(e) => {
                debug!("Response from {} is not valid JSON: {e}", request.url());
                response.set_error_if_absent(e);
                None
            }
        }
    } else {
        None
    };

    TypedResponse { response, data }
}

/// Executes `request` with browser headers and a fresh cookie store.
///
/// If the first attempt yields no HTTP status, the request is sent once more
/// marked as `X-Requested-With: XMLHttpRequest`; some servers only answer
/// AJAX-looking requests properly. The second response is returned as is.
pub async fn execute_with_headers<T: Transport>(
    transport: &T,
    mut request: Request,
    policy: &RetryPolicy,
) -> Response {
    transport.reset_cookies();
    request.apply_browser_headers();

    let response = execute_with_policy(transport, &request, policy).await;
    if response.has_status() {
        return response;
    }

    warn!(
        "No HTTP status from {}, retrying as XMLHttpRequest",
        request.url()
    );
    request.mark_as_xhr();
    execute_with_policy(transport, &request, policy).await
}
