//! Error types for the network and date helpers.
//!
//! # Design
//! `Network` keeps the status code so callers can tell a 404 from a 500,
//! but its message stays the fixed "Network response was not ok". Date
//! failures live in their own enum because `format_date` never touches the
//! network.

use thiserror::Error;

/// Errors returned by `JsonClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A GET response came back with a non-2xx status.
    #[error("Network response was not ok (HTTP {status})")]
    Network { status: u16 },

    /// The request never completed: DNS, connect, TLS, or body read failure.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Parse(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors returned by `format_date`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date: {input:?}")]
    Invalid { input: String },
}
