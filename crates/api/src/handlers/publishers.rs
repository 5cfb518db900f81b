//! Handlers for publisher directory and profile creation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use sponsorhub_core::error::CoreError;
use sponsorhub_core::types::DbId;
use sponsorhub_db::models::ad_slot::AdSlot;
use sponsorhub_db::models::placement::Placement;
use sponsorhub_db::models::publisher::{CreatePublisher, Publisher};
use sponsorhub_db::repositories::{AdSlotRepo, PublisherRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Placements shown inline on the publisher detail view.
const RECENT_PLACEMENTS: i64 = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublisherRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub monthly_views: Option<i64>,
    pub subscriber_count: Option<i64>,
}

#[derive(Serialize)]
struct SponsorName {
    name: String,
}

#[derive(Serialize)]
struct CampaignWithSponsor {
    name: String,
    sponsor: SponsorName,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublisherPlacementItem {
    #[serde(flatten)]
    placement: Placement,
    campaign: CampaignWithSponsor,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublisherDetail {
    #[serde(flatten)]
    publisher: Publisher,
    ad_slots: Vec<AdSlot>,
    placements: Vec<PublisherPlacementItem>,
}

/// GET /api/publishers
///
/// Public directory, highest traffic first, with inventory counts.
pub async fn list_publishers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let publishers = PublisherRepo::list(&state.pool).await?;
    Ok(Json(publishers))
}

/// GET /api/publishers/{id}
///
/// Public detail: the publisher's ad slots plus recent placements with
/// campaign and sponsor names.
pub async fn get_publisher(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let publisher = PublisherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Publisher",
            id,
        }))?;

    let ad_slots = AdSlotRepo::list_by_publisher(&state.pool, id).await?;

    let placements = PublisherRepo::recent_placements(&state.pool, id, RECENT_PLACEMENTS)
        .await?
        .into_iter()
        .map(|row| PublisherPlacementItem {
            campaign: CampaignWithSponsor {
                name: row.campaign_name,
                sponsor: SponsorName {
                    name: row.sponsor_name,
                },
            },
            placement: row.placement,
        })
        .collect();

    Ok(Json(PublisherDetail {
        publisher,
        ad_slots,
        placements,
    }))
}

/// POST /api/publishers
///
/// Authenticated. Same affiliation rule as sponsor creation: one
/// identity, at most one marketplace profile.
pub async fn create_publisher(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePublisherRequest>,
) -> AppResult<impl IntoResponse> {
    if user.actor.is_affiliated() {
        return Err(AppError::Core(CoreError::Conflict(
            "User already has a marketplace profile".to_string(),
        )));
    }

    let (Some(name), Some(email), Some(category)) = (input.name, input.email, input.category)
    else {
        return Err(AppError::Core(CoreError::Validation(
            "Name, email, and category are required".to_string(),
        )));
    };

    let publisher = PublisherRepo::create(
        &state.pool,
        &CreatePublisher {
            user_id: Some(user.user_id.clone()),
            name,
            email,
            website: input.website,
            description: input.description,
            category,
            monthly_views: input.monthly_views,
            subscriber_count: input.subscriber_count,
        },
    )
    .await?;

    tracing::info!(publisher_id = publisher.id, name = %publisher.name, "Publisher created");

    Ok((StatusCode::CREATED, Json(publisher)))
}
