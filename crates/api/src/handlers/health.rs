//! Health probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Probe time, RFC 3339.
    pub timestamp: String,
    /// Whether the database answered a trivial query.
    pub database: &'static str,
}

/// GET /api/health
///
/// Runs a `SELECT 1` against the pool; 503 when the database is
/// unreachable.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match sponsorhub_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                timestamp,
                database: "connected",
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "error",
                    timestamp,
                    database: "disconnected",
                }),
            )
        }
    }
}
