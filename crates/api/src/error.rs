use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use roster_db::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`DbError`].
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `roster_db`.
    #[error(transparent)]
    Database(#[from] DbError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::Spreadsheet(err)) => {
                tracing::error!(error = %err, "Spreadsheet serialization failed");
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal error");
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
            }
        }

        // Every variant is a server-side failure; details stay in the log.
        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
