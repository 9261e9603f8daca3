//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port inside the test's runtime, then
//! drives `JsonClient<ReqwestTransport>` over real HTTP.

use std::net::SocketAddr;

use nightingale_core::{legacy, ApiError, JsonClient, ReqwestTransport};
use serde_json::json;

async fn start_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    addr
}

fn client() -> JsonClient<ReqwestTransport> {
    JsonClient::with_reqwest()
}

#[tokio::test]
async fn fetch_json_ok() {
    let addr = start_server().await;
    let value = client().fetch_json(&format!("http://{addr}/ok")).await.unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[tokio::test]
async fn fetch_json_server_error_is_network_error() {
    let addr = start_server().await;
    let err = client()
        .fetch_json(&format!("http://{addr}/fail"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network { status: 500 }));
}

#[tokio::test]
async fn fetch_json_missing_route_is_network_error() {
    let addr = start_server().await;
    let err = client()
        .fetch_json(&format!("http://{addr}/missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network { status: 404 }));
}

#[tokio::test]
async fn fetch_json_plain_text_is_parse_error() {
    let addr = start_server().await;
    let err = client()
        .fetch_json(&format!("http://{addr}/not-json"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn fetch_json_malformed_url_is_transport_error() {
    let err = client().fetch_json("not a url").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn fetch_json_refused_connection_is_transport_error() {
    // Bind then drop to get a port nothing is listening on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let err = client().fetch_json(&format!("http://{addr}/ok")).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn post_json_sends_literal_body_and_content_type() {
    let addr = start_server().await;
    let value = client()
        .post_json(&format!("http://{addr}/submit"), &json!({"name": "x"}))
        .await
        .unwrap();
    assert_eq!(value["raw"], r#"{"name":"x"}"#);
    assert_eq!(value["content_type"], "application/json");
}

#[tokio::test]
async fn post_json_typed_payload() {
    #[derive(serde::Serialize)]
    struct Reading {
        patient: &'static str,
        pulse: u32,
    }

    let addr = start_server().await;
    let value = client()
        .post_json(
            &format!("http://{addr}/submit"),
            &Reading {
                patient: "p-1",
                pulse: 72,
            },
        )
        .await
        .unwrap();
    assert_eq!(value["raw"], r#"{"patient":"p-1","pulse":72}"#);
}

#[tokio::test]
async fn post_json_returns_body_of_rejected_request() {
    let addr = start_server().await;
    let value = client()
        .post_json(&format!("http://{addr}/reject"), &json!({}))
        .await
        .unwrap();
    assert_eq!(value, json!({"error": "rejected"}));
}

#[tokio::test]
async fn legacy_wrappers_over_real_http() {
    let addr = start_server().await;
    let c = client();

    assert_eq!(
        legacy::fetch_json_or_log(&c, &format!("http://{addr}/ok")).await,
        Some(json!({"a": 1}))
    );
    assert_eq!(legacy::fetch_json_or_log(&c, &format!("http://{addr}/fail")).await, None);
    assert_eq!(
        legacy::post_json_or_log(&c, &format!("http://{addr}/reject"), &json!({})).await,
        Some(json!({"error": "rejected"}))
    );
}

#[tokio::test]
async fn caller_supplied_reqwest_client() {
    let addr = start_server().await;
    let http = reqwest::Client::builder()
        .user_agent("nightingale-tests")
        .build()
        .unwrap();
    let c = JsonClient::new(ReqwestTransport::with_client(http));

    let value = c.fetch_json(&format!("http://{addr}/ok")).await.unwrap();
    assert_eq!(value, json!({"a": 1}));
}
