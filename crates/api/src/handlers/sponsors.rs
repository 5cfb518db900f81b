//! Handlers for sponsor directory and profile creation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use sponsorhub_core::error::CoreError;
use sponsorhub_core::types::DbId;
use sponsorhub_db::models::campaign::Campaign;
use sponsorhub_db::models::payment::Payment;
use sponsorhub_db::models::sponsor::{CreateSponsor, Sponsor};
use sponsorhub_db::repositories::{PaymentRepo, SponsorRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Payments shown inline on the sponsor detail view.
const RECENT_PAYMENTS: i64 = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSponsorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SponsorCampaignItem {
    #[serde(flatten)]
    campaign: Campaign,
    placement_count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SponsorDetail {
    #[serde(flatten)]
    sponsor: Sponsor,
    campaigns: Vec<SponsorCampaignItem>,
    payments: Vec<Payment>,
}

/// GET /api/sponsors
///
/// Public directory, newest first, with campaign counts.
pub async fn list_sponsors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sponsors = SponsorRepo::list(&state.pool).await?;
    Ok(Json(sponsors))
}

/// GET /api/sponsors/{id}
///
/// Public detail: campaigns with placement counts plus recent payments.
pub async fn get_sponsor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let sponsor = SponsorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sponsor",
            id,
        }))?;

    let campaigns = SponsorRepo::campaigns_with_counts(&state.pool, id)
        .await?
        .into_iter()
        .map(|row| SponsorCampaignItem {
            placement_count: row.placement_count,
            campaign: row.campaign,
        })
        .collect();

    let payments = PaymentRepo::recent_for_sponsor(&state.pool, id, RECENT_PAYMENTS).await?;

    Ok(Json(SponsorDetail {
        sponsor,
        campaigns,
        payments,
    }))
}

/// POST /api/sponsors
///
/// Authenticated. The new profile is bound to the caller's identity, and
/// a caller who already holds a profile (either kind) gets a 409; one
/// identity maps to at most one marketplace role.
pub async fn create_sponsor(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSponsorRequest>,
) -> AppResult<impl IntoResponse> {
    if user.actor.is_affiliated() {
        return Err(AppError::Core(CoreError::Conflict(
            "User already has a marketplace profile".to_string(),
        )));
    }

    let (Some(name), Some(email)) = (input.name, input.email) else {
        return Err(AppError::Core(CoreError::Validation(
            "Name and email are required".to_string(),
        )));
    };

    let sponsor = SponsorRepo::create(
        &state.pool,
        &CreateSponsor {
            user_id: Some(user.user_id.clone()),
            name,
            email,
            website: input.website,
            logo: input.logo,
            description: input.description,
            industry: input.industry,
        },
    )
    .await?;

    tracing::info!(sponsor_id = sponsor.id, name = %sponsor.name, "Sponsor created");

    Ok((StatusCode::CREATED, Json(sponsor)))
}
