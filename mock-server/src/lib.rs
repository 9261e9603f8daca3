use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub fn app() -> Router {
    Router::new()
        .route("/ok", get(ok))
        .route("/fail", get(fail))
        .route("/not-json", get(not_json))
        .route("/submit", post(submit))
        .route("/reject", post(reject))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ok() -> Json<Value> {
    Json(json!({"a": 1}))
}

async fn fail() -> (StatusCode, Json<Value>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "internal"})))
}

async fn not_json() -> &'static str {
    "plain text, not json"
}

/// Echo the raw body and its content type so callers can check exactly what
/// was sent.
async fn submit(headers: HeaderMap, body: String) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    Json(json!({"raw": body, "content_type": content_type}))
}

async fn reject() -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"error": "rejected"})))
}
