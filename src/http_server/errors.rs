//! # HTTP API Errors
//!
//! Every handler failure is one of these variants. The `Display` text is the
//! exact plain-text body sent to the client, so storage details never leak;
//! the underlying cause is logged where the error is classified.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, info};

use crate::model::StudentId;
use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Id path segment is not a non-negative integer
    #[error("Invalid studentId")]
    InvalidStudentId,

    /// Body is not a `{name, age}` JSON object
    #[error("Invalid request body")]
    InvalidBody,

    /// Wrong method on the create endpoint
    #[error("Not Found")]
    RouteNotFound,

    /// Id does not exist in the store
    #[error("No student found with id {0}")]
    StudentNotFound(StudentId),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure, carrying only the client-safe message
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidStudentId => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::StudentNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classify a store failure for `operation`, logging the cause.
    pub fn from_store(
        operation: &'static str,
        student_id: Option<StudentId>,
        err: StoreError,
    ) -> Self {
        match err {
            StoreError::NotFound(id) => {
                info!(operation, student_id = id, "student not found");
                ApiError::StudentNotFound(id)
            }
            other => {
                error!(operation, student_id = ?student_id, error = %other, "store operation failed");
                ApiError::Internal(client_message(operation))
            }
        }
    }
}

fn client_message(operation: &str) -> &'static str {
    match operation {
        "list_students" => "Failed to list students",
        "create_student" => "Error creating student",
        "get_student" => "Error getting student",
        "update_student" => "Error updating student",
        "delete_student" => "Error deleting student",
        _ => "Internal error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidStudentId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::StudentNotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ApiError::from_store("get_student", Some(9), StoreError::NotFound(9));
        assert_eq!(err, ApiError::StudentNotFound(9));
        assert_eq!(err.to_string(), "No student found with id 9");
    }

    #[test]
    fn test_storage_failure_hides_engine_text() {
        let err = ApiError::from_store(
            "update_student",
            Some(4),
            StoreError::storage("update_student", sqlx::Error::PoolTimedOut),
        );
        assert_eq!(err, ApiError::Internal("Error updating student"));
        assert!(!err.to_string().contains("pool"));
    }
}
