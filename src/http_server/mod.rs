//! # HTTP Server Module
//!
//! Axum request router and handlers for the student API.
//!
//! # Endpoints
//!
//! - `GET /healthcheck` - Liveness check
//! - `GET {prefix}/students` - List students
//! - `POST {prefix}/students/add` - Create a student
//! - `GET|PATCH|DELETE {prefix}/students/{id}` - Read, replace or remove one student

pub mod config;
pub mod errors;
pub mod extract;
pub mod health_routes;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use student_routes::CreatedResponse;
