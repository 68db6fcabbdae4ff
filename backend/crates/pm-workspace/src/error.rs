use pm_core::CoreError;
use pm_db::DbError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Invalid reference in {field}: {message} {location}")]
    InvalidReference {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Task write succeeded but the project's progress could not be recomputed
    #[error("Progress sync failed for project {project_id}: {message} {location}")]
    TransientSyncFailure {
        project_id: Uuid,
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl WorkspaceError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_reference(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidReference {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transient_sync_failure(project_id: Uuid, cause: &WorkspaceError) -> Self {
        Self::TransientSyncFailure {
            project_id,
            message: cause.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for WorkspaceError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for WorkspaceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidProjectStatus { value, .. } => Self::Validation {
                message: format!("Unknown project status '{}'", value),
                field: Some("status".to_string()),
                location,
            },
            CoreError::InvalidTaskStatus { value, .. } => Self::Validation {
                message: format!("Unknown task status '{}'", value),
                field: Some("status".to_string()),
                location,
            },
        }
    }
}

pub type Result<T> = StdResult<T, WorkspaceError>;
