//! Repository for the `campaigns` table.

use sponsorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{
    Campaign, CampaignFilter, CampaignListRow, CampaignPlacementRow, CreateCampaign,
    UpdateCampaign,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sponsor_id, name, description, budget, spent, status, \
    start_date, end_date, target_categories, target_regions, created_at, updated_at";

/// Provides CRUD operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCampaign) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns
                (sponsor_id, name, description, budget, start_date, end_date,
                 target_categories, target_regions)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(input.sponsor_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.budget)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.target_categories)
            .bind(&input.target_regions)
            .fetch_one(pool)
            .await
    }

    /// Find a campaign by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List campaigns with sponsor summary and child counts, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &CampaignFilter,
    ) -> Result<Vec<CampaignListRow>, sqlx::Error> {
        sqlx::query_as::<_, CampaignListRow>(
            "SELECT c.*,
                    sp.name AS sponsor_name,
                    sp.logo AS sponsor_logo,
                    (SELECT COUNT(*) FROM creatives cr WHERE cr.campaign_id = c.id) AS creative_count,
                    (SELECT COUNT(*) FROM placements pl WHERE pl.campaign_id = c.id) AS placement_count
             FROM campaigns c
             JOIN sponsors sp ON sp.id = c.sponsor_id
             WHERE ($1::BIGINT IS NULL OR c.sponsor_id = $1)
               AND ($2::campaign_status IS NULL OR c.status = $2)
             ORDER BY c.created_at DESC",
        )
        .bind(filter.sponsor_id)
        .bind(filter.status)
        .fetch_all(pool)
        .await
    }

    /// Placements belonging to one campaign, with slot and publisher
    /// summaries for the detail view.
    pub async fn placements_for_campaign(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Vec<CampaignPlacementRow>, sqlx::Error> {
        sqlx::query_as::<_, CampaignPlacementRow>(
            "SELECT pl.*,
                    s.name AS ad_slot_name,
                    p.name AS publisher_name,
                    p.category AS publisher_category
             FROM placements pl
             JOIN ad_slots s ON s.id = pl.ad_slot_id
             JOIN publishers p ON p.id = pl.publisher_id
             WHERE pl.campaign_id = $1
             ORDER BY pl.created_at DESC",
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }

    /// Update a campaign. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCampaign,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                budget = COALESCE($4, budget),
                status = COALESCE($5, status),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                target_categories = COALESCE($8, target_categories),
                target_regions = COALESCE($9, target_regions),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.budget)
            .bind(input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.target_categories)
            .bind(&input.target_regions)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a campaign. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
