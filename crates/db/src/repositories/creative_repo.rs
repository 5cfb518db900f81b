//! Repository for the `creatives` table.

use sponsorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::creative::{CreateCreative, Creative};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, campaign_id, name, type, content_url, created_at, updated_at";

/// Provides operations for campaign creatives.
pub struct CreativeRepo;

impl CreativeRepo {
    /// Insert a new creative, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCreative) -> Result<Creative, sqlx::Error> {
        let query = format!(
            "INSERT INTO creatives (campaign_id, name, type, content_url)
             VALUES ($1, $2, COALESCE($3, 'IMAGE'), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Creative>(&query)
            .bind(input.campaign_id)
            .bind(&input.name)
            .bind(&input.creative_type)
            .bind(&input.content_url)
            .fetch_one(pool)
            .await
    }

    /// All creatives for a campaign, oldest first.
    pub async fn list_by_campaign(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Vec<Creative>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM creatives
             WHERE campaign_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Creative>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }
}
