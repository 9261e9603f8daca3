//! Swallow-and-log wrappers for callers that expect "value or nothing".
//!
//! Each wrapper logs a failure exactly once at `error` level with a fixed
//! prefix and returns `None`. A `None` here cannot be told apart from a
//! failed call, so new code should use `JsonClient` directly.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::client::JsonClient;
use crate::http::HttpTransport;

pub const FETCH_FAILURE_PREFIX: &str = "There has been a problem with your fetch operation:";
pub const POST_FAILURE_PREFIX: &str = "Error posting data:";

pub async fn fetch_json_or_log<T: HttpTransport>(client: &JsonClient<T>, url: &str) -> Option<Value> {
    match client.fetch_json(url).await {
        Ok(value) => Some(value),
        Err(e) => {
            error!(url, "{FETCH_FAILURE_PREFIX} {e}");
            None
        }
    }
}

pub async fn post_json_or_log<T, P>(client: &JsonClient<T>, url: &str, payload: &P) -> Option<Value>
where
    T: HttpTransport,
    P: Serialize + ?Sized,
{
    match client.post_json(url, payload).await {
        Ok(value) => Some(value),
        Err(e) => {
            error!(url, "{POST_FAILURE_PREFIX} {e}");
            None
        }
    }
}
