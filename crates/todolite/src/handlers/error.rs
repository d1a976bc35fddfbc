//! Handler-level error translation.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use todolite_core::storage::{repository_error_to_status_code, RepositoryError};

/// Error type returned by the todo handlers.
///
/// Every error leaving the routing layer goes through this type, so the
/// `{"detail": ...}` body shape and the status mapping live in one place.
#[derive(Debug)]
pub enum ApiError {
    /// A repository operation failed.
    Repository(RepositoryError),
    /// The request body failed to deserialize.
    InvalidPayload(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Repository(err) => {
                let status = StatusCode::from_u16(repository_error_to_status_code(&err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, err.to_string())
            }
            ApiError::InvalidPayload(rejection) => {
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
        };

        if status.is_server_error() {
            tracing::error!(status = %status, detail = %detail, "Request failed");
        } else {
            tracing::warn!(status = %status, detail = %detail, "Request rejected");
        }

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload(rejection)
    }
}
