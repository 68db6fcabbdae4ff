use crate::ApiError;

use pm_workspace::WorkspaceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Project not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Unknown project status 'Done'".into(),
        field: Some("status".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "status");
}

#[tokio::test]
async fn test_invalid_reference_returns_400_with_field() {
    let error = ApiError::InvalidReference {
        message: "A valid projectId is required".into(),
        field: "projectId".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_REFERENCE");
    assert_eq!(json["error"]["field"], "projectId");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "disk I/O error at /var/lib/workspace.db".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[test]
fn test_workspace_not_found_maps_to_not_found() {
    let error: ApiError = WorkspaceError::not_found("Task", Uuid::new_v4()).into();

    match error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Task not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_workspace_invalid_reference_keeps_field() {
    let error: ApiError = WorkspaceError::invalid_reference("projectId", "missing").into();

    match error {
        ApiError::InvalidReference { field, .. } => assert_eq!(field, "projectId"),
        other => panic!("expected InvalidReference, got {other:?}"),
    }
}

#[test]
fn test_workspace_store_error_maps_to_internal() {
    let db_error = pm_db::DbError::Initialization {
        message: "pool closed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let error: ApiError = WorkspaceError::from(db_error).into();

    assert!(matches!(error, ApiError::Internal { .. }));
}
