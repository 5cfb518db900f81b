use crate::types::DbId;

/// Domain errors shared by the marketplace crates.
///
/// Each variant corresponds to exactly one HTTP status at the API
/// boundary, and the `Display` output is the message the wire contract
/// exposes, so the API layer renders these without reformatting.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The addressed entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The payload failed a domain check (missing field, nonpositive
    /// price, inverted date range).
    #[error("{0}")]
    Validation(String),

    /// The request collides with existing state, e.g. a caller who
    /// already holds a marketplace profile creating a second one.
    #[error("{0}")]
    Conflict(String),

    /// No usable session credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated, but the caller's role or ownership does not
    /// permit the operation.
    #[error("{0}")]
    Forbidden(String),
}

impl CoreError {
    /// Machine-readable error code carried in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::Unauthorized(_) => "UNAUTHORIZED",
            CoreError::Forbidden(_) => "FORBIDDEN",
        }
    }
}
