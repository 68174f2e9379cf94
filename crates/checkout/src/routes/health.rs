//! Health check route handler.

use axum::http::StatusCode;

/// Liveness probe.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
