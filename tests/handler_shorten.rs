mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use snaplink::api::handlers::shorten_handler;
use snaplink::state::AppState;

fn app(state: AppState) -> TestServer {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(router).unwrap()
}

#[tokio::test]
async fn test_shorten_creates_new_link() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(
        body["shortURL"],
        format!("{}/{}", common::TEST_BASE_URL, code)
    );
    assert_eq!(repo.record_count(), 1);
}

#[tokio::test]
async fn test_shorten_dedup_returns_existing() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    let first = server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com", "userId": "user1" }))
        .await;
    first.assert_status(StatusCode::CREATED);
    let first_code = first.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    let second = server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com", "userId": "user1" }))
        .await;

    // Dedup hit: same code, no new record, 200 instead of 201.
    second.assert_status(StatusCode::OK);
    assert_eq!(second.json::<serde_json::Value>()["code"], first_code);
    assert_eq!(repo.record_count(), 1);
}

#[tokio::test]
async fn test_shorten_dedup_is_owner_scoped() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    // Same URL but an owner present: dedup does not cross the owner boundary.
    let owned = server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com", "userId": "user1" }))
        .await;

    owned.assert_status(StatusCode::CREATED);
    assert_eq!(repo.record_count(), 2);
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com", "customCode": "promo-2025" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"], "promo-2025");
    assert_eq!(
        body["shortURL"],
        format!("{}/promo-2025", common::TEST_BASE_URL)
    );
}

#[tokio::test]
async fn test_shorten_custom_code_conflict() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com", "customCode": "abc123" }))
        .await
        .assert_status(StatusCode::CREATED);

    // Same code for a different URL and a different owner: still a conflict,
    // the namespace is shared.
    let response = server
        .post("/shorten")
        .json(&json!({
            "longURL": "https://other.com",
            "customCode": "abc123",
            "userId": "user2"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(repo.record_count(), 1);
}

#[tokio::test]
async fn test_shorten_custom_code_no_dedup() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com", "userId": "user1" }))
        .await
        .assert_status(StatusCode::CREATED);

    // Requesting a custom code bypasses dedup and mints a second record for
    // the same URL.
    let response = server
        .post("/shorten")
        .json(&json!({
            "longURL": "https://example.com",
            "customCode": "branded",
            "userId": "user1"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["code"], "branded");
    assert_eq!(repo.record_count(), 2);
}

#[tokio::test]
async fn test_shorten_empty_url_rejected() {
    let (state, repo) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "longURL": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(repo.record_count(), 0);
}

#[tokio::test]
async fn test_shorten_whitespace_url_rejected() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "longURL": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_invalid_custom_code_rejected() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com", "customCode": "bad code!" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_reserved_custom_code_rejected() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "longURL": "https://example.com", "customCode": "health" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_error_body_shape() {
    let (state, _repo) = common::create_test_state();
    let server = app(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "longURL": "" }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["message"].is_string());
}
