//! REST API error types
//!
//! Every failure leaves the server as `{ "error": { code, message, field? } }`.

use pm_workspace::WorkspaceError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Reference to an entity that does not exist (400)
    #[error("Invalid reference in {field}: {message} {location}")]
    InvalidReference {
        message: String,
        field: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). The message is logged, never sent.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::InvalidReference { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_REFERENCE".into(),
                    message,
                    field: Some(field),
                },
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: INTERNAL_ERROR_MESSAGE.into(),
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<WorkspaceError> for ApiError {
    #[track_caller]
    fn from(e: WorkspaceError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            WorkspaceError::NotFound { entity, .. } => ApiError::NotFound {
                message: format!("{} not found", entity),
                location,
            },
            WorkspaceError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            WorkspaceError::InvalidReference { field, message, .. } => {
                ApiError::InvalidReference {
                    message,
                    field: field.to_string(),
                    location,
                }
            }
            // Store failures and sync failures that escaped a SyncOutcome
            other => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
