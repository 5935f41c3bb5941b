use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mission_core::error::CoreError;
use mission_core::mission::MISSION_NOT_FOUND_MESSAGE;
use serde_json::json;

/// Application-level error type for the service layer and HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Implements [`IntoResponse`]: every not-found condition becomes a
/// plain-text 404, everything else a sanitized JSON 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mission_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Whether this error should surface as a 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::Core(core) => core.is_not_found(),
            AppError::Database(sqlx::Error::RowNotFound) => true,
            AppError::Database(_) => false,
        }
    }
}

/// Convenience type alias for service and handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            tracing::debug!(error = %self, "Mission lookup came back empty");
            return (StatusCode::NOT_FOUND, MISSION_NOT_FOUND_MESSAGE).into_response();
        }

        match &self {
            AppError::Core(core) => tracing::error!(error = %core, "Internal core error"),
            AppError::Database(err) => tracing::error!(error = %err, "Database error"),
        }

        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
