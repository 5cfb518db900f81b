//! Repository for the `payments` table. Read-mostly: payments are
//! historical records surfaced in sponsor detail views.

use sponsorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sponsor_id, amount, status, description, created_at";

/// Provides operations for sponsor payment history.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a payment record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (sponsor_id, amount, status, description)
             VALUES ($1, $2, COALESCE($3, 'COMPLETED'), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.sponsor_id)
            .bind(input.amount)
            .bind(&input.status)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// The most recent payments for a sponsor.
    pub async fn recent_for_sponsor(
        pool: &PgPool,
        sponsor_id: DbId,
        limit: i64,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments
             WHERE sponsor_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(sponsor_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
