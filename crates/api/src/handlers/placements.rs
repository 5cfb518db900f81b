//! Handlers for placements.
//!
//! Creation is intentionally open to any caller; placements are proposals
//! linking existing campaigns, creatives, and slots, and carry their own
//! approval lifecycle in `status`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use sponsorhub_core::error::CoreError;
use sponsorhub_core::types::{DbId, Timestamp};
use sponsorhub_db::models::placement::{
    CreatePlacement, Placement, PlacementFilter, PlacementStatus,
};
use sponsorhub_db::repositories::PlacementRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementListQuery {
    pub campaign_id: Option<DbId>,
    pub publisher_id: Option<DbId>,
    pub status: Option<PlacementStatus>,
}

#[derive(Serialize)]
struct NamedRef {
    id: DbId,
    name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlacementListItem {
    #[serde(flatten)]
    placement: Placement,
    campaign: NamedRef,
    creative: NamedRef,
    ad_slot: NamedRef,
    publisher: NamedRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlacementRequest {
    pub campaign_id: Option<DbId>,
    pub creative_id: Option<DbId>,
    pub ad_slot_id: Option<DbId>,
    pub publisher_id: Option<DbId>,
    pub agreed_price: Option<f64>,
    pub pricing_model: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// GET /api/placements
///
/// Public listing, newest first, with the names of every linked entity.
pub async fn list_placements(
    State(state): State<AppState>,
    Query(query): Query<PlacementListQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = PlacementFilter {
        campaign_id: query.campaign_id,
        publisher_id: query.publisher_id,
        status: query.status,
    };

    let rows = PlacementRepo::list(&state.pool, &filter).await?;

    let items: Vec<PlacementListItem> = rows
        .into_iter()
        .map(|row| PlacementListItem {
            campaign: NamedRef {
                id: row.placement.campaign_id,
                name: row.campaign_name,
            },
            creative: NamedRef {
                id: row.placement.creative_id,
                name: row.creative_name,
            },
            ad_slot: NamedRef {
                id: row.placement.ad_slot_id,
                name: row.ad_slot_name,
            },
            publisher: NamedRef {
                id: row.placement.publisher_id,
                name: row.publisher_name,
            },
            placement: row.placement,
        })
        .collect();

    Ok(Json(items))
}

/// POST /api/placements
///
/// No role or ownership check on creation.
pub async fn create_placement(
    State(state): State<AppState>,
    Json(input): Json<CreatePlacementRequest>,
) -> AppResult<impl IntoResponse> {
    let (
        Some(campaign_id),
        Some(creative_id),
        Some(ad_slot_id),
        Some(publisher_id),
        Some(agreed_price),
        Some(start_date),
        Some(end_date),
    ) = (
        input.campaign_id,
        input.creative_id,
        input.ad_slot_id,
        input.publisher_id,
        input.agreed_price,
        input.start_date,
        input.end_date,
    )
    else {
        return Err(AppError::Core(CoreError::Validation(
            "campaignId, creativeId, adSlotId, publisherId, agreedPrice, startDate, and endDate are required"
                .to_string(),
        )));
    };

    let placement = PlacementRepo::create(
        &state.pool,
        &CreatePlacement {
            campaign_id,
            creative_id,
            ad_slot_id,
            publisher_id,
            agreed_price,
            pricing_model: input.pricing_model,
            start_date,
            end_date,
        },
    )
    .await?;

    tracing::info!(
        placement_id = placement.id,
        campaign_id,
        ad_slot_id,
        "Placement created",
    );

    Ok((StatusCode::CREATED, Json(placement)))
}
