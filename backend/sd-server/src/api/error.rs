//! REST API error types
//!
//! Every error renders the same envelope:
//! `{"status": "error", "message": "...", "errors": {field: [messages]}}`,
//! with `errors` present only for field-level validation failures.

use crate::api::response_status::ResponseStatus;

use sd_core::{CoreError, FieldErrors};
use sd_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Database operation failed";

/// JSON error envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more fields failed validation (400)
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    /// Request could not be read (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500); `cause` is logged, never sent
    #[error("Internal error: {message}: {cause} {location}")]
    Internal {
        message: String,
        cause: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Database failure; the client only sees a generic message
    #[track_caller]
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            cause: cause.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { errors, .. } => ApiErrorResponse {
                status: ResponseStatus::Error,
                message: VALIDATION_FAILED_MESSAGE.to_string(),
                errors: Some(errors),
            },
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Internal { message, .. } => ApiErrorResponse {
                status: ResponseStatus::Error,
                message,
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        ApiError::internal(e)
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { errors, .. } => ApiError::validation(errors),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Validation { source, .. } => ApiError::from(source),
            DbError::Sqlx { source, .. } => ApiError::from(source),
            other => ApiError::internal(other),
        }
    }
}

/// Unreadable JSON bodies, wrong content type and mistyped fields
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
