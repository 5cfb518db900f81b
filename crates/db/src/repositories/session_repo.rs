//! Repository for the `sessions` table.
//!
//! Sessions are owned by the external auth service; the marketplace only
//! reads them. `create` exists for tests and local seeding.

use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token, user_id, expires_at, created_at";

/// Read access to externally managed sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Find an unexpired session by its bearer token.
    pub async fn find_active_by_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM sessions WHERE token = $1 AND expires_at > NOW()");
        sqlx::query_as::<_, Session>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Insert a session row, returning it.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (token, user_id, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&input.token)
            .bind(&input.user_id)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }
}
