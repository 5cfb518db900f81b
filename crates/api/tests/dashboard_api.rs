//! HTTP-level integration tests for dashboard aggregates.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_publisher, seed_sponsor};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_platform_reports_zeroes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats = body_json(response).await;
    assert_eq!(stats["sponsors"], 0);
    assert_eq!(stats["publishers"], 0);
    assert_eq!(stats["activeCampaigns"], 0);
    assert_eq!(stats["totalPlacements"], 0);
    assert_eq!(stats["metrics"]["totalImpressions"], 0);
    // No impressions at all: the rate is 0, not NaN.
    assert_eq!(stats["metrics"]["avgCtr"], 0.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn counts_only_include_active_profiles(pool: PgPool) {
    let (sponsor, _) = seed_sponsor(&pool, "Acme", "user-sp").await;
    seed_sponsor(&pool, "Globex", "user-s2").await;
    seed_publisher(&pool, "DevBlog", "user-pub").await;

    sqlx::query("UPDATE sponsors SET is_active = FALSE WHERE id = $1")
        .bind(sponsor.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let stats = body_json(get(app, "/api/dashboard/stats").await).await;
    assert_eq!(stats["sponsors"], 1);
    assert_eq!(stats["publishers"], 1);
    assert_eq!(stats["activeCampaigns"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn avg_ctr_is_rounded_to_two_decimals(pool: PgPool) {
    let (sponsor, _) = seed_sponsor(&pool, "Acme", "user-sp").await;
    let (publisher, _) = seed_publisher(&pool, "DevBlog", "user-pub").await;

    // Seed a full chain with metrics directly in SQL.
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO campaigns (sponsor_id, name, budget, start_date, end_date, status)
         VALUES ($1, 'Launch', 5000, NOW(), NOW() + INTERVAL '30 days', 'ACTIVE')
         RETURNING id",
    )
    .bind(sponsor.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    let campaign_id = row.0;

    let row: (i64,) = sqlx::query_as(
        "INSERT INTO creatives (campaign_id, name) VALUES ($1, 'Hero') RETURNING id",
    )
    .bind(campaign_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    let creative_id = row.0;

    let row: (i64,) = sqlx::query_as(
        "INSERT INTO ad_slots (publisher_id, name, type, base_price)
         VALUES ($1, 'Banner', 'DISPLAY', 500) RETURNING id",
    )
    .bind(publisher.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    let ad_slot_id = row.0;

    // 400 clicks over 30000 impressions: 1.3333...% -> 1.33.
    sqlx::query(
        "INSERT INTO placements
            (campaign_id, creative_id, ad_slot_id, publisher_id, agreed_price,
             start_date, end_date, impressions, clicks, conversions)
         VALUES ($1, $2, $3, $4, 450, NOW(), NOW() + INTERVAL '14 days', 30000, 400, 12)",
    )
    .bind(campaign_id)
    .bind(creative_id)
    .bind(ad_slot_id)
    .bind(publisher.id)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let stats = body_json(get(app, "/api/dashboard/stats").await).await;
    assert_eq!(stats["activeCampaigns"], 1);
    assert_eq!(stats["totalPlacements"], 1);
    assert_eq!(stats["metrics"]["totalImpressions"], 30000);
    assert_eq!(stats["metrics"]["totalClicks"], 400);
    assert_eq!(stats["metrics"]["totalConversions"], 12);
    assert_eq!(stats["metrics"]["avgCtr"], 1.33);
}
