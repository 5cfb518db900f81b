//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod ad_slot_repo;
pub mod campaign_repo;
pub mod creative_repo;
pub mod dashboard_repo;
pub mod payment_repo;
pub mod placement_repo;
pub mod publisher_repo;
pub mod session_repo;
pub mod sponsor_repo;

pub use actor_repo::{ActorRepo, ResolvedProfile};
pub use ad_slot_repo::AdSlotRepo;
pub use campaign_repo::CampaignRepo;
pub use creative_repo::CreativeRepo;
pub use dashboard_repo::{DashboardRepo, PlatformCounts};
pub use payment_repo::PaymentRepo;
pub use placement_repo::PlacementRepo;
pub use publisher_repo::PublisherRepo;
pub use session_repo::SessionRepo;
pub use sponsor_repo::SponsorRepo;
