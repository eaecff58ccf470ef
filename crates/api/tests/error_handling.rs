//! Tests for `AppError` -> HTTP response mapping.
//!
//! These verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use storycraft_api::error::AppError;
use storycraft_core::error::CoreError;
use storycraft_db::StorageError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "OrderStatus",
        id: "abc123".to_string(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "OrderStatus with id abc123 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with field detail intact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_detail() {
    let err = AppError::Core(CoreError::Validation(
        "child_age must be between 0 and 14, got 20".to_string(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("child_age"));
}

// ---------------------------------------------------------------------------
// Test: StorageError::NotConfigured maps to 500 with STORAGE_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unconfigured_storage_returns_500() {
    let err = AppError::Storage(StorageError::NotConfigured);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORAGE_ERROR");
    assert_eq!(json["error"], "no database is configured");
}

// ---------------------------------------------------------------------------
// Test: serialization failures surface as storage errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn serialization_failure_returns_500() {
    let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = AppError::Storage(StorageError::Serialization(serde_err));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORAGE_ERROR");
}
