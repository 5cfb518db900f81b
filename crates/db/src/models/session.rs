//! Session rows written by the external auth service.
//!
//! This service never issues or revokes sessions; it only looks them up
//! to resolve a bearer token to a user identity.

use sponsorhub_core::types::{DbId, Timestamp, UserId};
use sqlx::FromRow;

/// A row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub token: String,
    pub user_id: UserId,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for inserting a session. Used by tests and local seeding only;
/// in production the auth service owns this table.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: Timestamp,
}
