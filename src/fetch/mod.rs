//! Request execution.
//!
//! This module handles:
//! - The request/response model and the transport seam
//! - Retry-policy wrapping that turns failures into responses
//! - Browser header injection with an AJAX fallback
//! - Heuristic redirect following

mod client;
mod execute;
mod policy;
mod redirects;
mod request;
mod response;
mod transport;

pub use client::RedirectClient;
pub use execute::{execute_json_with_policy, execute_with_headers, execute_with_policy};
pub use policy::{PolicyOutcome, RetryPolicy};
pub use redirects::{
    execute_with_redirects, follow_redirects, location_from_response, resolve_location,
    RedirectState,
};
pub use request::{BrowserHeaders, Request};
pub use response::{Response, TypedResponse};
pub use transport::{HttpTransport, ResettableCookieJar, Transport};
