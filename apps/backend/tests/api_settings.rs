//! Settings API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL before running.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

/// Test a new profile gets default settings.
#[tokio::test]
#[ignore = "requires database"]
async fn test_default_settings() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let (profile_id, token) = ctx.create_test_profile(None).await;

    let response = server
        .get("/api/settings")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["words_per_session"].as_i64().unwrap(), 10);
    assert_eq!(body["reviews_per_day"].as_i64().unwrap(), 30);
    assert_eq!(body["min_difficulty"].as_i64().unwrap(), 1);
    assert_eq!(body["max_difficulty"].as_i64().unwrap(), 5);

    ctx.cleanup_profile(profile_id).await;
}

/// Test partial updates leave the other fields untouched.
#[tokio::test]
#[ignore = "requires database"]
async fn test_partial_update() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let (profile_id, token) = ctx.create_test_profile(None).await;

    let response = server
        .put("/api/settings")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .json(&fixtures::update_settings_request(Some(5), None))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["words_per_session"].as_i64().unwrap(), 5);
    assert_eq!(body["reviews_per_day"].as_i64().unwrap(), 30);

    ctx.cleanup_profile(profile_id).await;
}

/// Test updates persist across reads.
#[tokio::test]
#[ignore = "requires database"]
async fn test_update_persists() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let (profile_id, token) = ctx.create_test_profile(None).await;

    let _ = server
        .put("/api/settings")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .json(&fixtures::update_settings_request(Some(15), Some(3)))
        .await;

    let response = server
        .get("/api/settings")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["words_per_session"].as_i64().unwrap(), 15);
    assert_eq!(body["max_difficulty"].as_i64().unwrap(), 3);

    ctx.cleanup_profile(profile_id).await;
}

/// Test an inverted difficulty range is rejected.
#[tokio::test]
#[ignore = "requires database"]
async fn test_invalid_difficulty_range_rejected() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let (profile_id, token) = ctx.create_test_profile(None).await;

    let response = server
        .put("/api/settings")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .json(&serde_json::json!({ "min_difficulty": 4, "max_difficulty": 2 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    ctx.cleanup_profile(profile_id).await;
}

/// Test zero session limits are rejected.
#[tokio::test]
#[ignore = "requires database"]
async fn test_zero_limits_rejected() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();
    let (profile_id, token) = ctx.create_test_profile(None).await;

    let response = server
        .put("/api/settings")
        .add_header(
            axum::http::header::AUTHORIZATION,
            TestContext::auth_header_value(&token),
        )
        .json(&fixtures::update_settings_request(Some(0), None))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    ctx.cleanup_profile(profile_id).await;
}
