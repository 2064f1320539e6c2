use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gamestore_core::error::CoreError;
use gamestore_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gamestore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from `gamestore_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Missing resources answer with a bare 404 and no payload.
            AppError::Core(CoreError::NotFound { .. })
            | AppError::Store(StoreError::Database(sqlx::Error::RowNotFound)) => {
                return StatusCode::NOT_FOUND.into_response();
            }

            // --- CoreError variants ---
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                internal_error()
            }

            // --- Store errors ---
            AppError::Store(StoreError::UnknownGenre(id)) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_GENRE",
                format!("Genre with id {id} does not exist"),
            ),
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - Foreign key violations (SQLSTATE 23503) map to 400: the only foreign
///   key is `games.genre_id`.
/// - Unique constraint violations (SQLSTATE 23505) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_GENRE",
                "Referenced genre does not exist".to_string(),
            ),
            Some("23505") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                )
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal_error()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}
