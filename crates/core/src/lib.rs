//! Domain types shared by the SponsorHub db and api crates.

pub mod actor;
pub mod error;
pub mod types;
pub mod validation;
