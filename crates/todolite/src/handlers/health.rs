//! Health check endpoint.

use axum::{http::StatusCode, Json};

/// GET /health - Basic liveness probe.
///
/// Returns 200 immediately with a static body. Does NOT touch storage, so
/// it stays useful when the database is the thing that broke.
#[axum::debug_handler]
pub async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Healthy",
            "status": "ok",
        })),
    )
}
