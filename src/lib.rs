//! redirect_resolver library: follow HTTP redirects the way a browser user would
//!
//! On top of a `reqwest` transport this crate provides:
//! - retry-policy-wrapped execution that reports failures on the response
//!   instead of returning errors
//! - browser-like request headers with a one-shot `X-Requested-With` fallback
//!   when a server gives no HTTP status
//! - a redirect loop that follows `Location` headers and URLs embedded in the
//!   query string of the resolved URI (`?continue=https://...`)
//! - request parameters populated from plain types via [`params::ParamSource`]
//!
//! # Example
//!
//! ```no_run
//! use redirect_resolver::{Config, RedirectClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RedirectClient::from_config(&Config::default())?;
//! let response = client.resolve("https://example.com/r?url=https://example.org/").await?;
//! match response.url() {
//!     Some(target) => println!("{} ({})", target, response.status()),
//!     None => println!("failed: {:?}", response.error()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod params;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, RetryConfig};
pub use error_handling::{ErrorType, FetchError, InitializationError};
pub use fetch::{
    execute_json_with_policy, execute_with_headers, execute_with_policy, execute_with_redirects,
    HttpTransport, PolicyOutcome, RedirectClient, Request, Response, RetryPolicy, Transport,
    TypedResponse,
};
pub use params::{ParamField, ParamSource, ParamValue};
