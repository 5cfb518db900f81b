//! Creative entity model and DTO.
//!
//! Creatives have no HTTP surface of their own; they appear nested in
//! campaign detail responses and are referenced by placements.

use serde::Serialize;
use sponsorhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `creatives` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    pub id: DbId,
    pub campaign_id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub creative_type: String,
    pub content_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a creative.
#[derive(Debug, Clone)]
pub struct CreateCreative {
    pub campaign_id: DbId,
    pub name: String,
    /// Defaults to `IMAGE` when omitted.
    pub creative_type: Option<String>,
    pub content_url: Option<String>,
}
