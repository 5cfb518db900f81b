//! Platform-wide dashboard aggregates.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use sponsorhub_db::repositories::{DashboardRepo, PlacementRepo};

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardMetrics {
    total_impressions: i64,
    total_clicks: i64,
    total_conversions: i64,
    avg_ctr: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardStats {
    sponsors: i64,
    publishers: i64,
    active_campaigns: i64,
    total_placements: i64,
    metrics: DashboardMetrics,
}

/// GET /api/dashboard/stats
///
/// Read-only aggregation. Average click-through rate is a percentage
/// rounded to two decimals and reported as 0 when there are no
/// impressions at all.
pub async fn stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = DashboardRepo::platform_counts(&state.pool).await?;
    let metrics = PlacementRepo::aggregate_metrics(&state.pool).await?;

    let avg_ctr = if metrics.total_impressions > 0 {
        let ctr = metrics.total_clicks as f64 / metrics.total_impressions as f64 * 100.0;
        (ctr * 100.0).round() / 100.0
    } else {
        0.0
    };

    Ok(Json(DashboardStats {
        sponsors: counts.active_sponsors,
        publishers: counts.active_publishers,
        active_campaigns: counts.active_campaigns,
        total_placements: counts.total_placements,
        metrics: DashboardMetrics {
            total_impressions: metrics.total_impressions,
            total_clicks: metrics.total_clicks,
            total_conversions: metrics.total_conversions,
            avg_ctr,
        },
    }))
}
