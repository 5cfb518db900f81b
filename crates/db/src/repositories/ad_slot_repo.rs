//! Repository for the `ad_slots` table, including the booking transition.

use sponsorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::ad_slot::{
    AdSlot, AdSlotFilter, AdSlotListRow, CreateAdSlot, SlotPlacementRow, UpdateAdSlot,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, publisher_id, name, description, type, position, width, height, \
    base_price, is_available, created_at, updated_at";

/// Provides CRUD operations and availability transitions for ad slots.
pub struct AdSlotRepo;

impl AdSlotRepo {
    /// Insert a new ad slot, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAdSlot) -> Result<AdSlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO ad_slots
                (publisher_id, name, description, type, position, width, height, base_price)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdSlot>(&query)
            .bind(input.publisher_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.slot_type)
            .bind(&input.position)
            .bind(input.width)
            .bind(input.height)
            .bind(input.base_price)
            .fetch_one(pool)
            .await
    }

    /// Find an ad slot by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdSlot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ad_slots WHERE id = $1");
        sqlx::query_as::<_, AdSlot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Catalog listing with publisher summary and placement counts.
    ///
    /// Ownership scoping for publisher callers is expressed as the
    /// `publisher_id` filter so counts and ordering stay correct per
    /// owner. Premium inventory first: ordered by base price descending.
    pub async fn list(
        pool: &PgPool,
        filter: &AdSlotFilter,
    ) -> Result<Vec<AdSlotListRow>, sqlx::Error> {
        sqlx::query_as::<_, AdSlotListRow>(
            "SELECT s.*,
                    p.name AS publisher_name,
                    p.category AS publisher_category,
                    p.monthly_views AS publisher_monthly_views,
                    (SELECT COUNT(*) FROM placements pl WHERE pl.ad_slot_id = s.id) AS placement_count
             FROM ad_slots s
             JOIN publishers p ON p.id = s.publisher_id
             WHERE ($1::BIGINT IS NULL OR s.publisher_id = $1)
               AND ($2::ad_slot_type IS NULL OR s.type = $2)
               AND (NOT $3 OR s.is_available)
             ORDER BY s.base_price DESC",
        )
        .bind(filter.publisher_id)
        .bind(filter.slot_type)
        .bind(filter.available_only)
        .fetch_all(pool)
        .await
    }

    /// All slots belonging to one publisher, ordered by base price.
    pub async fn list_by_publisher(
        pool: &PgPool,
        publisher_id: DbId,
    ) -> Result<Vec<AdSlot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ad_slots
             WHERE publisher_id = $1
             ORDER BY base_price DESC"
        );
        sqlx::query_as::<_, AdSlot>(&query)
            .bind(publisher_id)
            .fetch_all(pool)
            .await
    }

    /// Placements referencing one slot, with campaign summaries.
    pub async fn placements_for_slot(
        pool: &PgPool,
        ad_slot_id: DbId,
    ) -> Result<Vec<SlotPlacementRow>, sqlx::Error> {
        sqlx::query_as::<_, SlotPlacementRow>(
            "SELECT pl.*, c.name AS campaign_name, c.status AS campaign_status
             FROM placements pl
             JOIN campaigns c ON c.id = pl.campaign_id
             WHERE pl.ad_slot_id = $1
             ORDER BY pl.created_at DESC",
        )
        .bind(ad_slot_id)
        .fetch_all(pool)
        .await
    }

    /// Update an ad slot. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdSlot,
    ) -> Result<Option<AdSlot>, sqlx::Error> {
        let query = format!(
            "UPDATE ad_slots SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                type = COALESCE($4, type),
                position = COALESCE($5, position),
                width = COALESCE($6, width),
                height = COALESCE($7, height),
                base_price = COALESCE($8, base_price),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdSlot>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.slot_type)
            .bind(&input.position)
            .bind(input.width)
            .bind(input.height)
            .bind(input.base_price)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an ad slot. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ad_slots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically transition a slot from available to booked.
    ///
    /// The availability check and the write are a single conditional
    /// UPDATE, so two concurrent bookings of the same slot cannot both
    /// succeed. Returns `None` when the slot is absent OR already booked;
    /// callers distinguish the two with [`AdSlotRepo::find_by_id`].
    pub async fn book(pool: &PgPool, id: DbId) -> Result<Option<AdSlot>, sqlx::Error> {
        let query = format!(
            "UPDATE ad_slots
             SET is_available = FALSE, updated_at = NOW()
             WHERE id = $1 AND is_available = TRUE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdSlot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a slot available again. Idempotent: unbooking an already
    /// available slot is a no-op success. Returns `None` only when the
    /// slot does not exist.
    pub async fn unbook(pool: &PgPool, id: DbId) -> Result<Option<AdSlot>, sqlx::Error> {
        let query = format!(
            "UPDATE ad_slots
             SET is_available = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdSlot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
