mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use link_shortener::api::handlers::shorten_handler;
use serde_json::json;

fn create_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let server = create_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_key"], "c984d0");
    assert_eq!(json["short_url"], "http://localhost:3000/short/c984d0");
    assert_eq!(json["long_url"], "https://example.com");
}

#[tokio::test]
async fn test_shorten_with_custom_suffix() {
    let server = create_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom_suffix": "1" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_key"], "d1b6b5");
    assert_eq!(json["long_url"], "https://example.com/1");
}

#[tokio::test]
async fn test_shorten_same_url_twice() {
    let server = create_server();
    let body = json!({ "url": "https://www.rust-lang.org/learn" });

    let first = server.post("/api/shorten").json(&body).await;
    let second = server.post("/api/shorten").json(&body).await;

    first.assert_status_ok();
    second.assert_status_ok();

    let first = first.json::<serde_json::Value>();
    let second = second.json::<serde_json::Value>();
    assert_eq!(first["short_key"], second["short_key"]);
    assert_eq!(first["short_key"], "213de6");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = create_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_whitespace_url() {
    let server = create_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "   ");
    assert_eq!(json["short_key"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = create_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "custom_suffix": "docs" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_shorten_storage_unavailable() {
    let state = common::create_state_with_store(std::sync::Arc::new(common::UnavailableStore));
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "storage_unavailable");
}
