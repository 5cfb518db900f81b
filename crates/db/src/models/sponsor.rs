//! Sponsor entity model and DTOs.

use serde::{Deserialize, Serialize};
use sponsorhub_core::types::{DbId, Timestamp, UserId};
use sqlx::FromRow;

/// A row from the `sponsors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub subscription_tier: String,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new sponsor profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSponsor {
    /// Always set from the authenticated caller, never from the payload.
    #[serde(skip_deserializing)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
}

/// List projection: sponsor plus its campaign count.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorListRow {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub sponsor: Sponsor,
    pub campaign_count: i64,
}
