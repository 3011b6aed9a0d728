//! Student HTTP Routes
//!
//! CRUD endpoints for student records. Each handler makes exactly one store
//! call and maps the outcome to a status code and body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::errors::{ApiError, ApiResult};
use super::extract::{decode_payload, StudentIdPath};
use crate::model::{Student, StudentId};
use crate::store::SharedStore;

// ==================
// Shared State
// ==================

/// Student state shared across handlers
pub struct StudentState {
    pub store: SharedStore,
}

impl StudentState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

/// Body returned by a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: StudentId,
    pub message: String,
}

impl CreatedResponse {
    pub fn new(id: StudentId) -> Self {
        Self {
            id,
            message: format!("Student created with id: {}", id),
        }
    }
}

// ==================
// Student Routes
// ==================

/// Create student routes
///
/// `/students/add` accepts every method so that non-POST requests get the
/// compatible 404 instead of axum's 405.
pub fn student_routes(state: Arc<StudentState>) -> Router {
    Router::new()
        .route("/students", get(list_students_handler))
        .route("/students/add", any(create_student_handler))
        .route(
            "/students/:id",
            get(get_student_handler)
                .patch(update_student_handler)
                .delete(delete_student_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_students_handler(
    State(state): State<Arc<StudentState>>,
) -> ApiResult<Json<Vec<Student>>> {
    let students = state
        .store
        .list_students()
        .await
        .map_err(|e| ApiError::from_store("list_students", None, e))?;

    debug!(count = students.len(), "listed students");
    Ok(Json(students))
}

async fn create_student_handler(
    State(state): State<Arc<StudentState>>,
    method: Method,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    if method != Method::POST {
        debug!(%method, "wrong method on create endpoint");
        return Err(ApiError::RouteNotFound);
    }

    let payload = decode_payload(&body)?;
    let id = state
        .store
        .create_student(&payload)
        .await
        .map_err(|e| ApiError::from_store("create_student", None, e))?;

    info!(student_id = id, "student created");
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

async fn get_student_handler(
    State(state): State<Arc<StudentState>>,
    StudentIdPath(id): StudentIdPath,
) -> ApiResult<Json<Student>> {
    let student = state
        .store
        .get_student(id)
        .await
        .map_err(|e| ApiError::from_store("get_student", Some(id), e))?;

    Ok(Json(student))
}

async fn update_student_handler(
    State(state): State<Arc<StudentState>>,
    StudentIdPath(id): StudentIdPath,
    body: Bytes,
) -> ApiResult<StatusCode> {
    let payload = decode_payload(&body)?;
    state
        .store
        .update_student(id, &payload)
        .await
        .map_err(|e| ApiError::from_store("update_student", Some(id), e))?;

    info!(student_id = id, "student updated");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_student_handler(
    State(state): State<Arc<StudentState>>,
    StudentIdPath(id): StudentIdPath,
) -> ApiResult<StatusCode> {
    state
        .store
        .delete_student(id)
        .await
        .map_err(|e| ApiError::from_store("delete_student", Some(id), e))?;

    info!(student_id = id, "student deleted");
    Ok(StatusCode::NO_CONTENT)
}
