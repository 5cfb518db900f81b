//! Repository for the `publishers` table.

use sponsorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::placement::PublisherPlacementRow;
use crate::models::publisher::{CreatePublisher, Publisher, PublisherListRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, email, website, description, category, \
    monthly_views, subscriber_count, is_verified, is_active, created_at, updated_at";

/// Provides CRUD operations for publishers.
pub struct PublisherRepo;

impl PublisherRepo {
    /// Insert a new publisher, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePublisher) -> Result<Publisher, sqlx::Error> {
        let query = format!(
            "INSERT INTO publishers
                (user_id, name, email, website, description, category, monthly_views, subscriber_count)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0), COALESCE($8, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publisher>(&query)
            .bind(&input.user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.website)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.monthly_views)
            .bind(input.subscriber_count)
            .fetch_one(pool)
            .await
    }

    /// Find a publisher by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Publisher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publishers WHERE id = $1");
        sqlx::query_as::<_, Publisher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all publishers with inventory counts, highest traffic first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PublisherListRow>, sqlx::Error> {
        sqlx::query_as::<_, PublisherListRow>(
            "SELECT p.*,
                    (SELECT COUNT(*) FROM ad_slots s WHERE s.publisher_id = p.id) AS ad_slot_count,
                    (SELECT COUNT(*) FROM placements pl WHERE pl.publisher_id = p.id) AS placement_count
             FROM publishers p
             ORDER BY p.monthly_views DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// The most recent placements on one publisher's inventory, with
    /// campaign and sponsor names for display.
    pub async fn recent_placements(
        pool: &PgPool,
        publisher_id: DbId,
        limit: i64,
    ) -> Result<Vec<PublisherPlacementRow>, sqlx::Error> {
        sqlx::query_as::<_, PublisherPlacementRow>(
            "SELECT pl.*, c.name AS campaign_name, sp.name AS sponsor_name
             FROM placements pl
             JOIN campaigns c ON c.id = pl.campaign_id
             JOIN sponsors sp ON sp.id = c.sponsor_id
             WHERE pl.publisher_id = $1
             ORDER BY pl.created_at DESC
             LIMIT $2",
        )
        .bind(publisher_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
