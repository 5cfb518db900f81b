//! Campaign entity model and DTOs.

use serde::{Deserialize, Serialize};
use sponsorhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Campaign lifecycle status. Matches the `campaign_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "campaign_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

/// A row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: DbId,
    pub sponsor_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub budget: f64,
    pub spent: f64,
    pub status: CampaignStatus,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub target_categories: Vec<String>,
    pub target_regions: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new campaign. `sponsor_id` always comes from the
/// authenticated caller.
#[derive(Debug, Clone)]
pub struct CreateCampaign {
    pub sponsor_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub budget: f64,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub target_categories: Vec<String>,
    pub target_regions: Vec<String>,
}

/// DTO for updating a campaign. Sparse patch; budget positivity and date
/// ordering are intentionally not re-validated here (see DESIGN.md).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaign {
    pub name: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub status: Option<CampaignStatus>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub target_categories: Option<Vec<String>>,
    pub target_regions: Option<Vec<String>>,
}

/// Filters for the campaign listing.
#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub sponsor_id: Option<DbId>,
    pub status: Option<CampaignStatus>,
}

/// Listing projection: campaign plus sponsor summary and child counts.
#[derive(Debug, Clone, FromRow)]
pub struct CampaignListRow {
    #[sqlx(flatten)]
    pub campaign: Campaign,
    pub sponsor_name: String,
    pub sponsor_logo: Option<String>,
    pub creative_count: i64,
    pub placement_count: i64,
}

/// Sponsor-detail projection: campaign plus its placement count.
#[derive(Debug, Clone, FromRow)]
pub struct CampaignWithPlacementCount {
    #[sqlx(flatten)]
    pub campaign: Campaign,
    pub placement_count: i64,
}

/// Campaign-detail projection: placement rows with slot and publisher
/// summaries.
#[derive(Debug, Clone, FromRow)]
pub struct CampaignPlacementRow {
    #[sqlx(flatten)]
    pub placement: super::placement::Placement,
    pub ad_slot_name: String,
    pub publisher_name: String,
    pub publisher_category: String,
}
