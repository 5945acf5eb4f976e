//! HTTP response model.
//!
//! This module defines the transport-independent response and converts
//! `reqwest` responses into it.

mod extract;
mod types;

pub(crate) use extract::extract_response;
pub use types::{Response, TypedResponse};
