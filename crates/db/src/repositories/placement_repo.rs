//! Repository for the `placements` table.

use sqlx::PgPool;

use crate::models::placement::{
    CreatePlacement, Placement, PlacementFilter, PlacementListRow, PlacementMetrics,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, campaign_id, creative_id, ad_slot_id, publisher_id, agreed_price, \
    pricing_model, start_date, end_date, status, impressions, clicks, conversions, \
    created_at, updated_at";

/// Provides list/create operations for placements. Placements have no
/// update or delete surface in this service.
pub struct PlacementRepo;

impl PlacementRepo {
    /// Insert a new placement, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlacement) -> Result<Placement, sqlx::Error> {
        let query = format!(
            "INSERT INTO placements
                (campaign_id, creative_id, ad_slot_id, publisher_id, agreed_price,
                 pricing_model, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'CPM'), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(input.campaign_id)
            .bind(input.creative_id)
            .bind(input.ad_slot_id)
            .bind(input.publisher_id)
            .bind(input.agreed_price)
            .bind(&input.pricing_model)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// List placements with linked-entity names, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &PlacementFilter,
    ) -> Result<Vec<PlacementListRow>, sqlx::Error> {
        sqlx::query_as::<_, PlacementListRow>(
            "SELECT pl.*,
                    c.name AS campaign_name,
                    cr.name AS creative_name,
                    s.name AS ad_slot_name,
                    p.name AS publisher_name
             FROM placements pl
             JOIN campaigns c ON c.id = pl.campaign_id
             JOIN creatives cr ON cr.id = pl.creative_id
             JOIN ad_slots s ON s.id = pl.ad_slot_id
             JOIN publishers p ON p.id = pl.publisher_id
             WHERE ($1::BIGINT IS NULL OR pl.campaign_id = $1)
               AND ($2::BIGINT IS NULL OR pl.publisher_id = $2)
               AND ($3::placement_status IS NULL OR pl.status = $3)
             ORDER BY pl.created_at DESC",
        )
        .bind(filter.campaign_id)
        .bind(filter.publisher_id)
        .bind(filter.status)
        .fetch_all(pool)
        .await
    }

    /// Summed impressions/clicks/conversions across all placements.
    pub async fn aggregate_metrics(pool: &PgPool) -> Result<PlacementMetrics, sqlx::Error> {
        sqlx::query_as::<_, PlacementMetrics>(
            "SELECT COALESCE(SUM(impressions), 0)::BIGINT AS total_impressions,
                    COALESCE(SUM(clicks), 0)::BIGINT AS total_clicks,
                    COALESCE(SUM(conversions), 0)::BIGINT AS total_conversions
             FROM placements",
        )
        .fetch_one(pool)
        .await
    }
}
