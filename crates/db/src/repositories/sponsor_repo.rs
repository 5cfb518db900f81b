//! Repository for the `sponsors` table.

use sponsorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::CampaignWithPlacementCount;
use crate::models::sponsor::{CreateSponsor, Sponsor, SponsorListRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, email, website, logo, description, industry, \
    subscription_tier, is_verified, is_active, created_at, updated_at";

/// Provides CRUD operations for sponsors.
pub struct SponsorRepo;

impl SponsorRepo {
    /// Insert a new sponsor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSponsor) -> Result<Sponsor, sqlx::Error> {
        let query = format!(
            "INSERT INTO sponsors (user_id, name, email, website, logo, description, industry)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sponsor>(&query)
            .bind(&input.user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.website)
            .bind(&input.logo)
            .bind(&input.description)
            .bind(&input.industry)
            .fetch_one(pool)
            .await
    }

    /// Find a sponsor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sponsor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sponsors WHERE id = $1");
        sqlx::query_as::<_, Sponsor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all sponsors with their campaign counts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<SponsorListRow>, sqlx::Error> {
        sqlx::query_as::<_, SponsorListRow>(
            "SELECT s.*,
                    (SELECT COUNT(*) FROM campaigns c WHERE c.sponsor_id = s.id) AS campaign_count
             FROM sponsors s
             ORDER BY s.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// List one sponsor's campaigns with per-campaign placement counts.
    pub async fn campaigns_with_counts(
        pool: &PgPool,
        sponsor_id: DbId,
    ) -> Result<Vec<CampaignWithPlacementCount>, sqlx::Error> {
        sqlx::query_as::<_, CampaignWithPlacementCount>(
            "SELECT c.*,
                    (SELECT COUNT(*) FROM placements p WHERE p.campaign_id = c.id) AS placement_count
             FROM campaigns c
             WHERE c.sponsor_id = $1
             ORDER BY c.created_at DESC",
        )
        .bind(sponsor_id)
        .fetch_all(pool)
        .await
    }
}
