//! Handlers for sponsor campaigns.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sponsorhub_core::error::CoreError;
use sponsorhub_core::types::{DbId, Timestamp};
use sponsorhub_core::validation::{validate_date_order, validate_positive_price};
use sponsorhub_db::models::campaign::{
    Campaign, CampaignFilter, CampaignStatus, CreateCampaign, UpdateCampaign,
};
use sponsorhub_db::models::creative::Creative;
use sponsorhub_db::models::placement::Placement;
use sponsorhub_db::models::sponsor::Sponsor;
use sponsorhub_db::repositories::{CampaignRepo, CreativeRepo, SponsorRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::middleware::rbac::RequireSponsor;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignListQuery {
    pub status: Option<CampaignStatus>,
    pub sponsor_id: Option<DbId>,
}

#[derive(Serialize)]
struct SponsorSummary {
    id: DbId,
    name: String,
    logo: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CampaignListItem {
    #[serde(flatten)]
    campaign: Campaign,
    sponsor: SponsorSummary,
    creative_count: i64,
    placement_count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CampaignPlacementItem {
    #[serde(flatten)]
    placement: Placement,
    ad_slot: AdSlotSummary,
    publisher: PublisherSummary,
}

#[derive(Serialize)]
struct AdSlotSummary {
    id: DbId,
    name: String,
}

#[derive(Serialize)]
struct PublisherSummary {
    id: DbId,
    name: String,
    category: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CampaignDetail {
    #[serde(flatten)]
    campaign: Campaign,
    sponsor: Sponsor,
    creatives: Vec<Creative>,
    placements: Vec<CampaignPlacementItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub target_categories: Option<Vec<String>>,
    pub target_regions: Option<Vec<String>>,
}

/// GET /api/campaigns
///
/// Public listing, newest first. Sponsor callers are scoped to their own
/// campaigns regardless of the `sponsorId` query parameter.
pub async fn list_campaigns(
    MaybeAuthUser(user): MaybeAuthUser,
    State(state): State<AppState>,
    Query(query): Query<CampaignListQuery>,
) -> AppResult<impl IntoResponse> {
    let caller_sponsor = user.as_ref().and_then(|u| u.actor.sponsor_id());
    let filter = CampaignFilter {
        sponsor_id: caller_sponsor.or(query.sponsor_id),
        status: query.status,
    };

    let rows = CampaignRepo::list(&state.pool, &filter).await?;

    let items: Vec<CampaignListItem> = rows
        .into_iter()
        .map(|row| CampaignListItem {
            sponsor: SponsorSummary {
                id: row.campaign.sponsor_id,
                name: row.sponsor_name,
                logo: row.sponsor_logo,
            },
            creative_count: row.creative_count,
            placement_count: row.placement_count,
            campaign: row.campaign,
        })
        .collect();

    Ok(Json(items))
}

/// GET /api/campaigns/{id}
///
/// Public detail view with sponsor, creatives, and placements.
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;

    let sponsor = SponsorRepo::find_by_id(&state.pool, campaign.sponsor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sponsor",
            id: campaign.sponsor_id,
        }))?;

    let creatives = CreativeRepo::list_by_campaign(&state.pool, id).await?;

    let placements = CampaignRepo::placements_for_campaign(&state.pool, id)
        .await?
        .into_iter()
        .map(|row| CampaignPlacementItem {
            ad_slot: AdSlotSummary {
                id: row.placement.ad_slot_id,
                name: row.ad_slot_name,
            },
            publisher: PublisherSummary {
                id: row.placement.publisher_id,
                name: row.publisher_name,
                category: row.publisher_category,
            },
            placement: row.placement,
        })
        .collect();

    Ok(Json(CampaignDetail {
        campaign,
        sponsor,
        creatives,
        placements,
    }))
}

/// POST /api/campaigns
///
/// Sponsor only. Budget must be positive and the campaign must start
/// before it ends; both are checked here at creation only.
pub async fn create_campaign(
    caller: RequireSponsor,
    State(state): State<AppState>,
    Json(input): Json<CreateCampaignRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(name), Some(budget), Some(start_date), Some(end_date)) =
        (input.name, input.budget, input.start_date, input.end_date)
    else {
        return Err(AppError::Core(CoreError::Validation(
            "Name, budget, startDate, and endDate are required".to_string(),
        )));
    };

    validate_positive_price("budget", budget)?;
    validate_date_order(start_date, end_date)?;

    let campaign = CampaignRepo::create(
        &state.pool,
        &CreateCampaign {
            sponsor_id: caller.sponsor_id,
            name,
            description: input.description,
            budget,
            start_date,
            end_date,
            target_categories: input.target_categories.unwrap_or_default(),
            target_regions: input.target_regions.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(
        campaign_id = campaign.id,
        sponsor_id = caller.sponsor_id,
        "Campaign created",
    );

    Ok((StatusCode::CREATED, Json(campaign)))
}

/// PUT /api/campaigns/{id}
///
/// Sponsor-owner only. Sparse patch; budget and date ordering are not
/// re-checked on update.
pub async fn update_campaign(
    caller: RequireSponsor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCampaign>,
) -> AppResult<impl IntoResponse> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;

    if !caller.user.actor.owns_sponsor(campaign.sponsor_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this campaign".to_string(),
        )));
    }

    let updated = CampaignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;

    Ok(Json(updated))
}

/// DELETE /api/campaigns/{id}
///
/// Sponsor-owner only. Creatives and placements go with it.
pub async fn delete_campaign(
    caller: RequireSponsor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;

    if !caller.user.actor.owns_sponsor(campaign.sponsor_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this campaign".to_string(),
        )));
    }

    CampaignRepo::delete(&state.pool, id).await?;

    tracing::info!(campaign_id = id, "Campaign deleted");

    Ok(Json(json!({ "success": true })))
}
