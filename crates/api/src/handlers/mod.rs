pub mod ad_slots;
pub mod auth;
pub mod campaigns;
pub mod dashboard;
pub mod health;
pub mod leads;
pub mod placements;
pub mod publishers;
pub mod sponsors;
