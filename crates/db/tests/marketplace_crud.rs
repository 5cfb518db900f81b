//! Integration tests for the marketplace repositories against a real
//! database:
//! - Profile, campaign, slot, creative, placement creation
//! - The booking transition (atomicity and idempotent unbook)
//! - Role resolution by profile ownership
//! - Sparse updates and cascade deletes
//! - Aggregate reads

use chrono::{Duration, Utc};
use sqlx::PgPool;
use sponsorhub_core::actor::Actor;
use sponsorhub_db::models::ad_slot::{AdSlotFilter, AdSlotType, CreateAdSlot, UpdateAdSlot};
use sponsorhub_db::models::campaign::{CampaignFilter, CreateCampaign, UpdateCampaign};
use sponsorhub_db::models::creative::CreateCreative;
use sponsorhub_db::models::placement::{CreatePlacement, PlacementFilter};
use sponsorhub_db::models::publisher::CreatePublisher;
use sponsorhub_db::models::session::CreateSession;
use sponsorhub_db::models::sponsor::CreateSponsor;
use sponsorhub_db::repositories::{
    ActorRepo, AdSlotRepo, CampaignRepo, CreativeRepo, DashboardRepo, PlacementRepo,
    PublisherRepo, SessionRepo, SponsorRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_sponsor(name: &str, email: &str, user_id: Option<&str>) -> CreateSponsor {
    CreateSponsor {
        user_id: user_id.map(str::to_string),
        name: name.to_string(),
        email: email.to_string(),
        website: None,
        logo: None,
        description: None,
        industry: None,
    }
}

fn new_publisher(name: &str, email: &str, user_id: Option<&str>) -> CreatePublisher {
    CreatePublisher {
        user_id: user_id.map(str::to_string),
        name: name.to_string(),
        email: email.to_string(),
        website: None,
        description: None,
        category: "Technology".to_string(),
        monthly_views: Some(120_000),
        subscriber_count: None,
    }
}

fn new_slot(publisher_id: i64, name: &str, base_price: f64) -> CreateAdSlot {
    CreateAdSlot {
        publisher_id,
        name: name.to_string(),
        description: None,
        slot_type: AdSlotType::Display,
        position: Some("header".to_string()),
        width: Some(728),
        height: Some(90),
        base_price,
    }
}

fn new_campaign(sponsor_id: i64, name: &str) -> CreateCampaign {
    let start = Utc::now();
    CreateCampaign {
        sponsor_id,
        name: name.to_string(),
        description: None,
        budget: 5000.0,
        start_date: start,
        end_date: start + Duration::days(30),
        target_categories: vec!["Technology".to_string()],
        target_regions: vec![],
    }
}

// ---------------------------------------------------------------------------
// Test: sponsor and publisher creation with counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_profiles_and_list(pool: PgPool) {
    let sponsor = SponsorRepo::create(&pool, &new_sponsor("Acme", "ads@acme.com", None))
        .await
        .unwrap();
    assert_eq!(sponsor.name, "Acme");
    assert_eq!(sponsor.subscription_tier, "FREE");
    assert!(sponsor.is_active);

    let publisher = PublisherRepo::create(&pool, &new_publisher("DevBlog", "hi@devblog.com", None))
        .await
        .unwrap();
    assert_eq!(publisher.category, "Technology");
    assert_eq!(publisher.monthly_views, 120_000);

    CampaignRepo::create(&pool, &new_campaign(sponsor.id, "Launch"))
        .await
        .unwrap();

    let sponsors = SponsorRepo::list(&pool).await.unwrap();
    assert_eq!(sponsors.len(), 1);
    assert_eq!(sponsors[0].campaign_count, 1);

    let publishers = PublisherRepo::list(&pool).await.unwrap();
    assert_eq!(publishers.len(), 1);
    assert_eq!(publishers[0].ad_slot_count, 0);
}

// ---------------------------------------------------------------------------
// Test: duplicate emails hit the uq_ constraint
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_sponsor_email_rejected(pool: PgPool) {
    SponsorRepo::create(&pool, &new_sponsor("First", "same@acme.com", None))
        .await
        .unwrap();

    let err = SponsorRepo::create(&pool, &new_sponsor("Second", "same@acme.com", None))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert!(db_err.constraint().unwrap().starts_with("uq_"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: booking transition is a single conditional update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_book_succeeds_once_then_returns_none(pool: PgPool) {
    let publisher = PublisherRepo::create(&pool, &new_publisher("DevBlog", "hi@devblog.com", None))
        .await
        .unwrap();
    let slot = AdSlotRepo::create(&pool, &new_slot(publisher.id, "Banner", 500.0))
        .await
        .unwrap();
    assert!(slot.is_available);

    let booked = AdSlotRepo::book(&pool, slot.id).await.unwrap();
    assert!(!booked.unwrap().is_available);

    // Slot still exists but is taken; the conditional update matches no row.
    let second = AdSlotRepo::book(&pool, slot.id).await.unwrap();
    assert!(second.is_none());
    let current = AdSlotRepo::find_by_id(&pool, slot.id).await.unwrap().unwrap();
    assert!(!current.is_available);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_book_missing_slot_returns_none(pool: PgPool) {
    let result = AdSlotRepo::book(&pool, 999_999).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unbook_is_idempotent(pool: PgPool) {
    let publisher = PublisherRepo::create(&pool, &new_publisher("DevBlog", "hi@devblog.com", None))
        .await
        .unwrap();
    let slot = AdSlotRepo::create(&pool, &new_slot(publisher.id, "Banner", 500.0))
        .await
        .unwrap();

    AdSlotRepo::book(&pool, slot.id).await.unwrap().unwrap();

    let first = AdSlotRepo::unbook(&pool, slot.id).await.unwrap().unwrap();
    assert!(first.is_available);

    // Unbooking an already available slot is a no-op success.
    let second = AdSlotRepo::unbook(&pool, slot.id).await.unwrap().unwrap();
    assert!(second.is_available);

    assert!(AdSlotRepo::unbook(&pool, 999_999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test: catalog filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_slot_listing_filters_and_ordering(pool: PgPool) {
    let p1 = PublisherRepo::create(&pool, &new_publisher("DevBlog", "hi@devblog.com", None))
        .await
        .unwrap();
    let p2 = PublisherRepo::create(&pool, &new_publisher("NewsCast", "hi@newscast.com", None))
        .await
        .unwrap();

    let cheap = AdSlotRepo::create(&pool, &new_slot(p1.id, "Sidebar", 100.0))
        .await
        .unwrap();
    let premium = AdSlotRepo::create(&pool, &new_slot(p2.id, "Hero", 900.0))
        .await
        .unwrap();
    let mut video = new_slot(p1.id, "Preroll", 400.0);
    video.slot_type = AdSlotType::Video;
    AdSlotRepo::create(&pool, &video).await.unwrap();

    AdSlotRepo::book(&pool, cheap.id).await.unwrap().unwrap();

    // Unfiltered: everything, premium first.
    let all = AdSlotRepo::list(&pool, &AdSlotFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].slot.id, premium.id);
    assert!(all.windows(2).all(|w| w[0].slot.base_price >= w[1].slot.base_price));

    // available=true drops the booked slot.
    let available = AdSlotRepo::list(
        &pool,
        &AdSlotFilter {
            available_only: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(available.len(), 2);
    assert!(available.iter().all(|r| r.slot.is_available));

    // Type filter.
    let videos = AdSlotRepo::list(
        &pool,
        &AdSlotFilter {
            slot_type: Some(AdSlotType::Video),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].slot.name, "Preroll");

    // Publisher scoping.
    let own = AdSlotRepo::list(
        &pool,
        &AdSlotFilter {
            publisher_id: Some(p1.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|r| r.slot.publisher_id == p1.id));
    assert_eq!(own[0].publisher_name, "DevBlog");
}

// ---------------------------------------------------------------------------
// Test: sparse updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_slot_sparse_update(pool: PgPool) {
    let publisher = PublisherRepo::create(&pool, &new_publisher("DevBlog", "hi@devblog.com", None))
        .await
        .unwrap();
    let slot = AdSlotRepo::create(&pool, &new_slot(publisher.id, "Banner", 500.0))
        .await
        .unwrap();

    let updated = AdSlotRepo::update(
        &pool,
        slot.id,
        &UpdateAdSlot {
            base_price: Some(750.0),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.base_price, 750.0);
    assert_eq!(updated.name, "Banner");
    assert_eq!(updated.position.as_deref(), Some("header"));

    assert!(AdSlotRepo::update(&pool, 999_999, &UpdateAdSlot::default())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_campaign_update_does_not_revalidate(pool: PgPool) {
    let sponsor = SponsorRepo::create(&pool, &new_sponsor("Acme", "ads@acme.com", None))
        .await
        .unwrap();
    let campaign = CampaignRepo::create(&pool, &new_campaign(sponsor.id, "Launch"))
        .await
        .unwrap();

    // The repository applies whatever it is given; the create-only
    // validation lives above it.
    let updated = CampaignRepo::update(
        &pool,
        campaign.id,
        &UpdateCampaign {
            budget: Some(-50.0),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.budget, -50.0);
    assert_eq!(updated.name, "Launch");
}

// ---------------------------------------------------------------------------
// Test: cascade deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_slot_delete_cascades_to_placements(pool: PgPool) {
    let sponsor = SponsorRepo::create(&pool, &new_sponsor("Acme", "ads@acme.com", None))
        .await
        .unwrap();
    let publisher = PublisherRepo::create(&pool, &new_publisher("DevBlog", "hi@devblog.com", None))
        .await
        .unwrap();
    let campaign = CampaignRepo::create(&pool, &new_campaign(sponsor.id, "Launch"))
        .await
        .unwrap();
    let creative = CreativeRepo::create(
        &pool,
        &CreateCreative {
            campaign_id: campaign.id,
            name: "Hero image".to_string(),
            creative_type: None,
            content_url: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(creative.creative_type, "IMAGE");

    let slot = AdSlotRepo::create(&pool, &new_slot(publisher.id, "Banner", 500.0))
        .await
        .unwrap();

    let start = Utc::now();
    PlacementRepo::create(
        &pool,
        &CreatePlacement {
            campaign_id: campaign.id,
            creative_id: creative.id,
            ad_slot_id: slot.id,
            publisher_id: publisher.id,
            agreed_price: 450.0,
            pricing_model: None,
            start_date: start,
            end_date: start + Duration::days(14),
        },
    )
    .await
    .unwrap();

    assert!(AdSlotRepo::delete(&pool, slot.id).await.unwrap());
    assert!(!AdSlotRepo::delete(&pool, slot.id).await.unwrap());

    let placements = PlacementRepo::list(&pool, &PlacementFilter::default())
        .await
        .unwrap();
    assert!(placements.is_empty());
}

// ---------------------------------------------------------------------------
// Test: role resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_actor_resolution_by_profile_ownership(pool: PgPool) {
    let sponsor = SponsorRepo::create(&pool, &new_sponsor("Acme", "ads@acme.com", Some("user-s")))
        .await
        .unwrap();
    let publisher = PublisherRepo::create(
        &pool,
        &new_publisher("DevBlog", "hi@devblog.com", Some("user-p")),
    )
    .await
    .unwrap();

    assert_eq!(
        ActorRepo::resolve(&pool, "user-s").await.unwrap(),
        Actor::Sponsor(sponsor.id)
    );
    assert_eq!(
        ActorRepo::resolve(&pool, "user-p").await.unwrap(),
        Actor::Publisher(publisher.id)
    );
    assert_eq!(
        ActorRepo::resolve(&pool, "user-nobody").await.unwrap(),
        Actor::Unaffiliated
    );

    let profile = ActorRepo::resolve_profile(&pool, "user-p").await.unwrap().unwrap();
    assert_eq!(profile.name, "DevBlog");
}

// ---------------------------------------------------------------------------
// Test: session lookup honours expiry
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_session_lookup_skips_expired_tokens(pool: PgPool) {
    SessionRepo::create(
        &pool,
        &CreateSession {
            token: "live-token".to_string(),
            user_id: "user-1".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .unwrap();
    SessionRepo::create(
        &pool,
        &CreateSession {
            token: "dead-token".to_string(),
            user_id: "user-1".to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        },
    )
    .await
    .unwrap();

    let live = SessionRepo::find_active_by_token(&pool, "live-token")
        .await
        .unwrap();
    assert_eq!(live.unwrap().user_id, "user-1");

    assert!(SessionRepo::find_active_by_token(&pool, "dead-token")
        .await
        .unwrap()
        .is_none());
    assert!(SessionRepo::find_active_by_token(&pool, "unknown")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: campaign listing and aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_campaign_listing_with_counts(pool: PgPool) {
    let s1 = SponsorRepo::create(&pool, &new_sponsor("Acme", "ads@acme.com", None))
        .await
        .unwrap();
    let s2 = SponsorRepo::create(&pool, &new_sponsor("Globex", "ads@globex.com", None))
        .await
        .unwrap();

    CampaignRepo::create(&pool, &new_campaign(s1.id, "Launch"))
        .await
        .unwrap();
    CampaignRepo::create(&pool, &new_campaign(s2.id, "Awareness"))
        .await
        .unwrap();

    let all = CampaignRepo::list(&pool, &CampaignFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].creative_count, 0);

    let scoped = CampaignRepo::list(
        &pool,
        &CampaignFilter {
            sponsor_id: Some(s1.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].sponsor_name, "Acme");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_aggregate_metrics_empty_database(pool: PgPool) {
    let counts = DashboardRepo::platform_counts(&pool).await.unwrap();
    assert_eq!(counts.active_sponsors, 0);
    assert_eq!(counts.total_placements, 0);

    let metrics = PlacementRepo::aggregate_metrics(&pool).await.unwrap();
    assert_eq!(metrics.total_impressions, 0);
    assert_eq!(metrics.total_clicks, 0);
    assert_eq!(metrics.total_conversions, 0);
}
