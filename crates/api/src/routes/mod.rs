pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                      health probe
/// /auth/role/{userId}          role lookup (public)
///
/// /sponsors                    list (public), create (authenticated)
/// /sponsors/{id}               detail (public)
/// /publishers                  list (public), create (authenticated)
/// /publishers/{id}             detail (public)
///
/// /campaigns                   list (public), create (sponsor)
/// /campaigns/{id}              detail (public), update/delete (sponsor-owner)
///
/// /ad-slots                    list (public), create (publisher)
/// /ad-slots/{id}               detail (auth), update/delete (publisher-owner)
/// /ad-slots/{id}/book          book (sponsor)
/// /ad-slots/{id}/unbook        unbook (publisher-owner)
///
/// /placements                  list, create (both public)
/// /dashboard/stats             platform aggregates (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/auth/role/{user_id}", get(handlers::auth::get_role))
        .route(
            "/sponsors",
            get(handlers::sponsors::list_sponsors).post(handlers::sponsors::create_sponsor),
        )
        .route("/sponsors/{id}", get(handlers::sponsors::get_sponsor))
        .route(
            "/publishers",
            get(handlers::publishers::list_publishers).post(handlers::publishers::create_publisher),
        )
        .route("/publishers/{id}", get(handlers::publishers::get_publisher))
        .route(
            "/campaigns",
            get(handlers::campaigns::list_campaigns).post(handlers::campaigns::create_campaign),
        )
        .route(
            "/campaigns/{id}",
            get(handlers::campaigns::get_campaign)
                .put(handlers::campaigns::update_campaign)
                .delete(handlers::campaigns::delete_campaign),
        )
        .route(
            "/ad-slots",
            get(handlers::ad_slots::list_ad_slots).post(handlers::ad_slots::create_ad_slot),
        )
        .route(
            "/ad-slots/{id}",
            get(handlers::ad_slots::get_ad_slot)
                .put(handlers::ad_slots::update_ad_slot)
                .delete(handlers::ad_slots::delete_ad_slot),
        )
        .route("/ad-slots/{id}/book", post(handlers::ad_slots::book_ad_slot))
        .route(
            "/ad-slots/{id}/unbook",
            post(handlers::ad_slots::unbook_ad_slot),
        )
        .route(
            "/placements",
            get(handlers::placements::list_placements)
                .post(handlers::placements::create_placement),
        )
        .route("/dashboard/stats", get(handlers::dashboard::stats))
}

/// Lead-capture routes mounted at the root, outside `/api`.
///
/// ```text
/// /newsletter/subscribe        newsletter signup
/// /newsletter/unsubscribe      newsletter removal
/// /quotes/request              sponsorship quote enquiry
/// ```
pub fn lead_routes() -> Router<AppState> {
    Router::new()
        .route("/newsletter/subscribe", post(handlers::leads::subscribe))
        .route("/newsletter/unsubscribe", post(handlers::leads::unsubscribe))
        .route("/quotes/request", post(handlers::leads::request_quote))
}
