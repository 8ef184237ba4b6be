use crate::ApiError;

use sd_core::{CoreError, FieldErrors};
use sd_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_envelope() {
    let (status, json) = body_json(ApiError::not_found("Save-date 7 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Save-date 7 not found");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field_errors() {
    let mut errors = FieldErrors::new();
    errors.add("title", "Ensure this field has at least 3 characters.");
    errors.add("event_city", "This field is required.");

    let (status, json) = body_json(ApiError::validation(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Validation failed.");
    assert_eq!(
        json["errors"]["title"][0],
        "Ensure this field has at least 3 characters."
    );
    assert_eq!(json["errors"]["event_city"][0], "This field is required.");
}

#[tokio::test]
async fn test_bad_request_returns_400_without_field_errors() {
    let (status, json) = body_json(ApiError::bad_request("Invalid save-date id: abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        cause: "disk I/O error".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Database operation failed");
    assert!(!json.to_string().contains("disk I/O error"));
}

#[test]
fn test_db_validation_error_maps_to_validation() {
    let mut errors = FieldErrors::new();
    errors.add("event_summary", "Ensure this field has at least 10 characters.");
    let db_error = DbError::from(CoreError::validation(errors.clone()));

    let api_error = ApiError::from(db_error);

    match api_error {
        ApiError::Validation { errors: mapped, .. } => assert_eq!(mapped, errors),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_db_serialization_error_maps_to_internal_without_details() {
    let db_error = DbError::Serialization {
        message: "corrupt event_times column".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error = ApiError::from(db_error);

    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    match api_error {
        ApiError::Internal { message, .. } => assert!(!message.contains("corrupt")),
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn test_sqlx_row_not_found_maps_to_internal() {
    let api_error = ApiError::from(sqlx::Error::RowNotFound);

    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_sqlx_error_cause_is_kept_for_the_log_line_only() {
    let api_error = ApiError::from(sqlx::Error::PoolClosed);
    let logged = api_error.to_string();

    let (status, json) = body_json(api_error).await;

    assert!(logged.contains(&sqlx::Error::PoolClosed.to_string()));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Database operation failed");
    assert!(!json.to_string().contains(&sqlx::Error::PoolClosed.to_string()));
}
