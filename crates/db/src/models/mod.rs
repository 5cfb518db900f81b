//! Entity models and DTOs.
//!
//! Row structs derive `FromRow` for sqlx and serialize with camelCase
//! field names: the JSON wire contract is inherited from the service
//! this backend replaces.

pub mod ad_slot;
pub mod campaign;
pub mod creative;
pub mod payment;
pub mod placement;
pub mod publisher;
pub mod session;
pub mod sponsor;
