//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved except for the malformed-body case at the end.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{body_json, post_raw, ScriptedStore};
use gatherly_api::error::AppError;
use gatherly_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) = error_to_response(CoreError::required("planner_id").into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({"error": "planner_id is required"}));
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound { entity: "Vendor" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Vendor not found");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("token expired".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "token expired");
}

#[tokio::test]
async fn config_error_returns_500_with_its_message() {
    let err = AppError::Core(CoreError::Config("Email service not configured".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Email service not configured");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("pool poisoned at 0x7f".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("0x7f"));
}

#[tokio::test]
async fn backend_error_exposes_details() {
    let err = AppError::backend("Failed to fetch vendor", "relation does not exist");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to fetch vendor");
    assert_eq!(json["details"], "relation does not exist");
}

#[tokio::test]
async fn opaque_error_hides_the_cause() {
    let err = AppError::opaque("Failed to add guest", "duplicate key value");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"error": "Failed to add guest"}));
}

#[tokio::test]
async fn probe_failure_returns_404_with_details() {
    let err = AppError::probe_failed("Event", "connection reset");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Event not found");
    assert_eq!(json["details"], "connection reset");
}

#[tokio::test]
async fn malformed_json_body_is_400_with_error_field() {
    let store = ScriptedStore::new();
    let app = common::build_test_app(store.clone(), None);

    let response = post_raw(app, "/events", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
    assert!(store.calls().is_empty());
}
