//! Logger and transport setup.
//!
//! Both initializers return `InitializationError` so the binary can report
//! setup failures before any request is made.

mod client;
mod logger;

// Re-export public API
pub use client::init_transport;
pub use logger::init_logger_with;
