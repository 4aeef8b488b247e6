use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use scorebook_core::{StoreError, ValidationError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Rendered as `{"detail": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The uploaded workbook was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The dataset could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("{0}")]
    BadRequest(String),

    /// No dataset has been loaded yet.
    #[error("Dataset not loaded.")]
    NotLoaded,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotLoaded => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Failed to persist dataset");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save dataset.".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
