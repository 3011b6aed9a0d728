//! Health HTTP Routes

use axum::{http::StatusCode, routing::get, Router};

/// Health check route, mounted at the root
pub fn health_routes() -> Router {
    Router::new().route("/healthcheck", get(health_handler))
}

/// Liveness only; the store is not consulted
async fn health_handler() -> StatusCode {
    StatusCode::OK
}
