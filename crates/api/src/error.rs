//! HTTP error mapping.
//!
//! Every handler returns [`AppResult`]; the [`IntoResponse`] impl turns
//! failures into `{"error": ..., "code": ...}` JSON bodies. Database
//! errors are classified by Postgres error code so that routine
//! user mistakes (duplicate emails, references to deleted rows) surface
//! as 4xx instead of opaque 500s.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sponsorhub_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unexpected failure. The message is logged, never sent to the client.
    #[error("{0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

const SANITIZED_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => (core_status(core), core.code(), core.to_string()),
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    SANITIZED_MESSAGE.to_string(),
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

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        CoreError::Conflict(_) => StatusCode::CONFLICT,
        CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
    }
}

/// Classify a sqlx error into status, code, and client-safe message.
///
/// Two Postgres integrity violations are user errors in this API and
/// map to 4xx:
///
/// - `23505` on a `uq_*` constraint: duplicate value (409). Profile
///   emails and user-id linkage are the constraints that hit this.
/// - `23503`: foreign key violation (400). Placement and campaign
///   creation take caller-supplied ids, so a reference to a missing or
///   already-deleted row is an ordinary bad request.
///
/// Everything else is logged and sanitized to a 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                Some("23503") => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_REFERENCE",
                    format!("Referenced row does not exist: {constraint}"),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        SANITIZED_MESSAGE.to_string(),
                    )
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                SANITIZED_MESSAGE.to_string(),
            )
        }
    }
}
