//! Payment history model. Read-only within this service; rows appear in
//! sponsor detail responses.

use serde::Serialize;
use sponsorhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: DbId,
    pub sponsor_id: DbId,
    pub amount: f64,
    pub status: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a payment record (billing integration / tests).
#[derive(Debug, Clone)]
pub struct CreatePayment {
    pub sponsor_id: DbId,
    pub amount: f64,
    /// Defaults to `COMPLETED` when omitted.
    pub status: Option<String>,
    pub description: Option<String>,
}
