//! Network and formatting helpers for Project Nightingale.
//!
//! # Overview
//! - `JsonClient::fetch_json` GETs a URL and returns its JSON body.
//! - `JsonClient::post_json` POSTs a JSON payload and returns the JSON reply.
//! - `log_user_input` logs a caller-supplied value.
//! - `format_date` renders a date-like value as a locale-style short date.
//!
//! # Design
//! - The HTTP client is injected through `HttpTransport`; `ReqwestTransport`
//!   is the production implementation and tests use stubs.
//! - Every fallible operation returns a `Result`. The old "log and return
//!   nothing" behavior lives in `legacy` for callers that still want it.
//! - Logging goes through `tracing`; the binary installs the subscriber.

pub mod client;
pub mod date;
pub mod error;
pub mod http;
pub mod input;
pub mod legacy;
pub mod logging;

use tracing::info;

pub use client::JsonClient;
pub use date::{format_date, format_date_with, DateInput, ShortDateStyle};
pub use error::{ApiError, DateError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use input::{log_user_input, log_user_input_display};

pub const WELCOME: &str = "Welcome to Project Nightingale!";

/// Log the startup welcome line.
pub fn announce() {
    info!("{WELCOME}");
}
