//! JSON request builder, response parser, and async round-trip helpers.
//!
//! # Design
//! `JsonClient` owns an `HttpTransport` and nothing else. Each operation is
//! split into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`; `fetch_json` and
//! `post_json` simply run build, execute, parse. Keeping the halves public
//! lets callers that do their own I/O reuse the exact request shape and the
//! exact status/JSON rules.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Stateless JSON-over-HTTP client over an injected transport.
#[derive(Debug, Clone)]
pub struct JsonClient<T> {
    transport: T,
}

impl JsonClient<ReqwestTransport> {
    /// Client backed by a default `reqwest::Client`.
    pub fn with_reqwest() -> Self {
        Self::new(ReqwestTransport::new())
    }
}

impl<T: HttpTransport> JsonClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_fetch_json(&self, url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_post_json<P>(&self, url: &str, payload: &P) -> Result<HttpRequest, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Reject non-2xx, then parse the body.
    pub fn parse_fetch_json(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if !response.is_ok() {
            return Err(ApiError::Network {
                status: response.status,
            });
        }
        parse_body(&response)
    }

    /// Parse the body whatever the status is.
    pub fn parse_post_json(&self, response: HttpResponse) -> Result<Value, ApiError> {
        parse_body(&response)
    }

    /// GET `url` and return its JSON body.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, ApiError> {
        let request = self.build_fetch_json(url);
        let response = self.transport.execute(request).await?;
        self.parse_fetch_json(response)
    }

    /// POST `payload` as JSON to `url` and return the response's JSON body.
    pub async fn post_json<P>(&self, url: &str, payload: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let request = self.build_post_json(url, payload)?;
        let response = self.transport.execute(request).await?;
        self.parse_post_json(response)
    }

    /// `post_json` with an empty URL and `{}` payload standing in for
    /// missing arguments.
    pub async fn post_json_default(
        &self,
        url: Option<&str>,
        payload: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let empty = Value::Object(Map::new());
        self.post_json(url.unwrap_or(""), payload.unwrap_or(&empty))
            .await
    }
}

fn parse_body(response: &HttpResponse) -> Result<Value, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
}
