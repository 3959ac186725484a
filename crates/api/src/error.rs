use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use staffhub_core::error::CoreError;

/// User-facing message for any failure while persisting an import batch.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload employees";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `staffhub_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An uploaded roster failed validation; carries every row message.
    #[error("Import rejected with {} error(s)", .0.len())]
    ImportRejected(Vec<String>),

    /// The store could not persist an import batch. The cause is logged,
    /// never returned to the client.
    #[error("Upload failed: {0}")]
    UploadFailed(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::ImportRejected(errors) => {
                let body = json!({
                    "error": "Employee data failed validation",
                    "code": "VALIDATION_ERROR",
                    "errors": errors,
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
            }
            AppError::UploadFailed(cause) => {
                tracing::error!(error = %cause, "Employee batch upload failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPLOAD_FAILED",
                    UPLOAD_FAILED_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
