//! Publisher entity model and DTOs.

use serde::{Deserialize, Serialize};
use sponsorhub_core::types::{DbId, Timestamp, UserId};
use sqlx::FromRow;

/// A row from the `publishers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub category: String,
    pub monthly_views: i64,
    pub subscriber_count: i64,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new publisher profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublisher {
    /// Always set from the authenticated caller, never from the payload.
    #[serde(skip_deserializing)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub category: String,
    pub monthly_views: Option<i64>,
    pub subscriber_count: Option<i64>,
}

/// List projection: publisher plus inventory counts.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherListRow {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub publisher: Publisher,
    pub ad_slot_count: i64,
    pub placement_count: i64,
}

/// Compact publisher projection embedded in ad-slot listings.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherSummary {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub monthly_views: i64,
}
