//! Handlers for ad-slot inventory and the booking flow.
//!
//! Booking is deliberately thin: it flips `isAvailable` and nothing else.
//! Placements are a separate workflow and are never created here.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sponsorhub_core::error::CoreError;
use sponsorhub_core::types::DbId;
use sponsorhub_core::validation::validate_positive_price;
use sponsorhub_db::models::ad_slot::{
    AdSlot, AdSlotFilter, AdSlotType, CreateAdSlot, UpdateAdSlot,
};
use sponsorhub_db::models::campaign::CampaignStatus;
use sponsorhub_db::models::placement::Placement;
use sponsorhub_db::models::publisher::{Publisher, PublisherSummary};
use sponsorhub_db::repositories::{AdSlotRepo, PublisherRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::middleware::rbac::{RequirePublisher, RequireSponsor};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdSlotListQuery {
    #[serde(rename = "type")]
    pub slot_type: Option<AdSlotType>,
    pub available: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdSlotListItem {
    #[serde(flatten)]
    slot: AdSlot,
    publisher: PublisherSummary,
    placement_count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotPlacementItem {
    #[serde(flatten)]
    placement: Placement,
    campaign: CampaignSummary,
}

#[derive(Serialize)]
struct CampaignSummary {
    id: DbId,
    name: String,
    status: CampaignStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdSlotDetail {
    #[serde(flatten)]
    slot: AdSlot,
    publisher: Publisher,
    placements: Vec<SlotPlacementItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdSlotRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub slot_type: Option<AdSlotType>,
    pub position: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub base_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub sponsor_id: Option<DbId>,
    pub message: Option<String>,
}

/// GET /api/ad-slots
///
/// Public catalog, ordered premium-first. Publisher callers only see
/// their own inventory; sponsors and anonymous callers see everything.
pub async fn list_ad_slots(
    MaybeAuthUser(user): MaybeAuthUser,
    State(state): State<AppState>,
    Query(query): Query<AdSlotListQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = AdSlotFilter {
        publisher_id: user.as_ref().and_then(|u| u.actor.publisher_id()),
        slot_type: query.slot_type,
        available_only: query.available.unwrap_or(false),
    };

    let rows = AdSlotRepo::list(&state.pool, &filter).await?;

    let items: Vec<AdSlotListItem> = rows
        .into_iter()
        .map(|row| AdSlotListItem {
            publisher: PublisherSummary {
                id: row.slot.publisher_id,
                name: row.publisher_name,
                category: row.publisher_category,
                monthly_views: row.publisher_monthly_views,
            },
            placement_count: row.placement_count,
            slot: row.slot,
        })
        .collect();

    Ok(Json(items))
}

/// GET /api/ad-slots/{id}
///
/// Requires authentication. Publishers may only read their own slots;
/// sponsors may read any slot (they need the detail to decide a booking).
pub async fn get_ad_slot(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slot = AdSlotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ad slot",
            id,
        }))?;

    if let Some(publisher_id) = user.actor.publisher_id() {
        if publisher_id != slot.publisher_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "You do not own this ad slot".to_string(),
            )));
        }
    }

    let publisher = PublisherRepo::find_by_id(&state.pool, slot.publisher_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Publisher",
            id: slot.publisher_id,
        }))?;

    let placements = AdSlotRepo::placements_for_slot(&state.pool, id)
        .await?
        .into_iter()
        .map(|row| SlotPlacementItem {
            campaign: CampaignSummary {
                id: row.placement.campaign_id,
                name: row.campaign_name,
                status: row.campaign_status,
            },
            placement: row.placement,
        })
        .collect();

    Ok(Json(AdSlotDetail {
        slot,
        publisher,
        placements,
    }))
}

/// POST /api/ad-slots
///
/// Publisher only. The slot always belongs to the caller's own publisher
/// profile; a publisherId in the payload is ignored.
pub async fn create_ad_slot(
    caller: RequirePublisher,
    State(state): State<AppState>,
    Json(input): Json<CreateAdSlotRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(name), Some(slot_type), Some(base_price)) =
        (input.name, input.slot_type, input.base_price)
    else {
        return Err(AppError::Core(CoreError::Validation(
            "Name, type, and basePrice are required".to_string(),
        )));
    };

    validate_positive_price("basePrice", base_price)?;

    let slot = AdSlotRepo::create(
        &state.pool,
        &CreateAdSlot {
            publisher_id: caller.publisher_id,
            name,
            description: input.description,
            slot_type,
            position: input.position,
            width: input.width,
            height: input.height,
            base_price,
        },
    )
    .await?;

    tracing::info!(
        ad_slot_id = slot.id,
        publisher_id = caller.publisher_id,
        "Ad slot created",
    );

    Ok((StatusCode::CREATED, Json(slot)))
}

/// PUT /api/ad-slots/{id}
///
/// Publisher-owner only. Sparse patch: absent fields keep their values.
/// Availability is not patchable here; it transitions through book/unbook.
pub async fn update_ad_slot(
    caller: RequirePublisher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdSlot>,
) -> AppResult<impl IntoResponse> {
    let slot = AdSlotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ad slot",
            id,
        }))?;

    if !caller.user.actor.owns_publisher(slot.publisher_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this ad slot".to_string(),
        )));
    }

    if let Some(base_price) = input.base_price {
        validate_positive_price("basePrice", base_price)?;
    }

    let updated = AdSlotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ad slot",
            id,
        }))?;

    Ok(Json(updated))
}

/// DELETE /api/ad-slots/{id}
///
/// Publisher-owner only. Unconditional: referencing placements are
/// removed by the cascade.
pub async fn delete_ad_slot(
    caller: RequirePublisher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slot = AdSlotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ad slot",
            id,
        }))?;

    if !caller.user.actor.owns_publisher(slot.publisher_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this ad slot".to_string(),
        )));
    }

    AdSlotRepo::delete(&state.pool, id).await?;

    tracing::info!(ad_slot_id = id, "Ad slot deleted");

    Ok(Json(json!({ "success": true })))
}

/// POST /api/ad-slots/{id}/book
///
/// Sponsor only. The availability check and the flip happen in one
/// conditional update, so two concurrent bookings cannot both win.
pub async fn book_ad_slot(
    caller: RequireSponsor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<BookRequest>>,
) -> AppResult<impl IntoResponse> {
    match AdSlotRepo::book(&state.pool, id).await? {
        Some(slot) => {
            let message = body
                .and_then(|Json(b)| b.message)
                .unwrap_or_else(|| "None".to_string());
            tracing::info!(
                ad_slot_id = id,
                sponsor_id = caller.sponsor_id,
                message = %message,
                "Ad slot booked",
            );

            Ok(Json(json!({
                "success": true,
                "message": "Ad slot booked successfully!",
                "adSlot": slot,
            })))
        }
        // Zero rows updated: either the slot is gone or someone got
        // there first. A second read tells the cases apart.
        None => match AdSlotRepo::find_by_id(&state.pool, id).await? {
            Some(_) => Err(AppError::Core(CoreError::Validation(
                "Ad slot is no longer available".to_string(),
            ))),
            None => Err(AppError::Core(CoreError::NotFound {
                entity: "Ad slot",
                id,
            })),
        },
    }
}

/// POST /api/ad-slots/{id}/unbook
///
/// Publisher-owner only. Idempotent: unbooking an already available slot
/// is a no-op success.
pub async fn unbook_ad_slot(
    caller: RequirePublisher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slot = AdSlotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ad slot",
            id,
        }))?;

    if !caller.user.actor.owns_publisher(slot.publisher_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this ad slot".to_string(),
        )));
    }

    let updated = AdSlotRepo::unbook(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ad slot",
            id,
        }))?;

    Ok(Json(json!({
        "success": true,
        "message": "Ad slot is now available again",
        "adSlot": updated,
    })))
}
