/// All marketplace primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Opaque identity assigned by the external session authority.
///
/// Sponsors and publishers optionally reference one of these via their
/// `user_id` column; the marketplace never mints or parses them.
pub type UserId = String;
