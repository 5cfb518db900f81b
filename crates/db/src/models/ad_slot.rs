//! Ad slot entity model and DTOs.

use serde::{Deserialize, Serialize};
use sponsorhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Inventory type for an ad slot. Matches the `ad_slot_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ad_slot_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdSlotType {
    Display,
    Video,
    Native,
    Newsletter,
    Podcast,
}

/// A row from the `ad_slots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSlot {
    pub id: DbId,
    pub publisher_id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub slot_type: AdSlotType,
    pub position: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub base_price: f64,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new ad slot. `publisher_id` always comes from the
/// authenticated caller, never from the request body.
#[derive(Debug, Clone)]
pub struct CreateAdSlot {
    pub publisher_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub slot_type: AdSlotType,
    pub position: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub base_price: f64,
}

/// DTO for updating an ad slot. Only non-`None` fields are applied
/// (sparse patch). Availability is excluded: it transitions solely
/// through book/unbook.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdSlot {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub slot_type: Option<AdSlotType>,
    pub position: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub base_price: Option<f64>,
}

/// Filters for the ad-slot catalog listing.
#[derive(Debug, Clone, Default)]
pub struct AdSlotFilter {
    /// Restrict to one publisher's inventory (ownership scoping).
    pub publisher_id: Option<DbId>,
    pub slot_type: Option<AdSlotType>,
    /// When true, only slots with `is_available = true`.
    pub available_only: bool,
}

/// Catalog projection: slot plus publisher summary columns and the
/// number of placements referencing it.
#[derive(Debug, Clone, FromRow)]
pub struct AdSlotListRow {
    #[sqlx(flatten)]
    pub slot: AdSlot,
    pub publisher_name: String,
    pub publisher_category: String,
    pub publisher_monthly_views: i64,
    pub placement_count: i64,
}

/// Detail projection: placement rows for one slot with their campaign.
#[derive(Debug, Clone, FromRow)]
pub struct SlotPlacementRow {
    #[sqlx(flatten)]
    pub placement: super::placement::Placement,
    pub campaign_name: String,
    pub campaign_status: super::campaign::CampaignStatus,
}
