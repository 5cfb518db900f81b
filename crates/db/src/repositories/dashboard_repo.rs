//! Aggregate platform-level reads for the dashboard.

use sqlx::PgPool;

/// Platform-wide entity counts.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct PlatformCounts {
    pub active_sponsors: i64,
    pub active_publishers: i64,
    pub active_campaigns: i64,
    pub total_placements: i64,
}

/// Read-only aggregation queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Counts of active sponsors/publishers, active campaigns, and all
    /// placements in one round trip.
    pub async fn platform_counts(pool: &PgPool) -> Result<PlatformCounts, sqlx::Error> {
        sqlx::query_as::<_, PlatformCounts>(
            "SELECT
                (SELECT COUNT(*) FROM sponsors WHERE is_active) AS active_sponsors,
                (SELECT COUNT(*) FROM publishers WHERE is_active) AS active_publishers,
                (SELECT COUNT(*) FROM campaigns WHERE status = 'ACTIVE') AS active_campaigns,
                (SELECT COUNT(*) FROM placements) AS total_placements",
        )
        .fetch_one(pool)
        .await
    }
}
