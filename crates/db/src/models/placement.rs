//! Placement entity model and DTOs.

use serde::{Deserialize, Serialize};
use sponsorhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Placement lifecycle status. Matches the `placement_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "placement_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementStatus {
    Pending,
    Approved,
    Rejected,
    Active,
    Paused,
    Completed,
}

/// A row from the `placements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub id: DbId,
    pub campaign_id: DbId,
    pub creative_id: DbId,
    pub ad_slot_id: DbId,
    pub publisher_id: DbId,
    pub agreed_price: f64,
    pub pricing_model: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub status: PlacementStatus,
    pub impressions: i64,
    pub clicks: i64,
    pub conversions: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new placement.
#[derive(Debug, Clone)]
pub struct CreatePlacement {
    pub campaign_id: DbId,
    pub creative_id: DbId,
    pub ad_slot_id: DbId,
    pub publisher_id: DbId,
    pub agreed_price: f64,
    /// Defaults to `CPM` when omitted.
    pub pricing_model: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Filters for the placement listing.
#[derive(Debug, Clone, Default)]
pub struct PlacementFilter {
    pub campaign_id: Option<DbId>,
    pub publisher_id: Option<DbId>,
    pub status: Option<PlacementStatus>,
}

/// Listing projection: placement plus names of every linked entity.
#[derive(Debug, Clone, FromRow)]
pub struct PlacementListRow {
    #[sqlx(flatten)]
    pub placement: Placement,
    pub campaign_name: String,
    pub creative_name: String,
    pub ad_slot_name: String,
    pub publisher_name: String,
}

/// Publisher-detail projection: placement plus campaign and sponsor names.
#[derive(Debug, Clone, FromRow)]
pub struct PublisherPlacementRow {
    #[sqlx(flatten)]
    pub placement: Placement,
    pub campaign_name: String,
    pub sponsor_name: String,
}

/// Aggregate metrics across all placements (dashboard).
#[derive(Debug, Clone, Copy, FromRow)]
pub struct PlacementMetrics {
    pub total_impressions: i64,
    pub total_clicks: i64,
    pub total_conversions: i64,
}
