//! Utility functions.
//!
//! This module provides:
//! - Error retriability determination

pub(crate) mod retry;

pub(crate) use retry::is_retriable_error;
