//! Shared helpers for HTTP-level integration tests.
//!
//! Uses Axum's `tower::ServiceExt::oneshot` to send requests directly to
//! the router without a TCP listener, and seeds sessions/profiles through
//! the repository layer so auth flows run exactly as in production.

// Each integration test binary compiles this module separately; not every
// binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tower::ServiceExt;

use sponsorhub_api::config::ServerConfig;
use sponsorhub_api::router::build_app_router;
use sponsorhub_api::state::AppState;
use sponsorhub_db::models::publisher::{CreatePublisher, Publisher};
use sponsorhub_db::models::session::CreateSession;
use sponsorhub_db::models::sponsor::{CreateSponsor, Sponsor};
use sponsorhub_db::repositories::{PublisherRepo, SessionRepo, SponsorRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] as `main.rs`, so
/// integration tests exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, bearer(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, bearer(token))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, bearer(token))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, bearer(token))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response status and return the parsed body.
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert an unexpired session for `user_id` and return its token.
pub async fn seed_session(pool: &PgPool, user_id: &str) -> String {
    let token = format!("token-{user_id}");
    SessionRepo::create(
        pool,
        &CreateSession {
            token: token.clone(),
            user_id: user_id.to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .unwrap();
    token
}

/// Insert an already-expired session for `user_id` and return its token.
pub async fn seed_expired_session(pool: &PgPool, user_id: &str) -> String {
    let token = format!("expired-{user_id}");
    SessionRepo::create(
        pool,
        &CreateSession {
            token: token.clone(),
            user_id: user_id.to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        },
    )
    .await
    .unwrap();
    token
}

/// Create a sponsor profile owned by `user_id` plus a live session.
/// Returns the sponsor and the session token.
pub async fn seed_sponsor(pool: &PgPool, name: &str, user_id: &str) -> (Sponsor, String) {
    let sponsor = SponsorRepo::create(
        pool,
        &CreateSponsor {
            user_id: Some(user_id.to_string()),
            name: name.to_string(),
            email: format!("{user_id}@sponsors.test"),
            website: None,
            logo: None,
            description: None,
            industry: None,
        },
    )
    .await
    .unwrap();
    let token = seed_session(pool, user_id).await;
    (sponsor, token)
}

/// Create a publisher profile owned by `user_id` plus a live session.
/// Returns the publisher and the session token.
pub async fn seed_publisher(pool: &PgPool, name: &str, user_id: &str) -> (Publisher, String) {
    let publisher = PublisherRepo::create(
        pool,
        &CreatePublisher {
            user_id: Some(user_id.to_string()),
            name: name.to_string(),
            email: format!("{user_id}@publishers.test"),
            website: None,
            description: None,
            category: "Technology".to_string(),
            monthly_views: Some(100_000),
            subscriber_count: None,
        },
    )
    .await
    .unwrap();
    let token = seed_session(pool, user_id).await;
    (publisher, token)
}
