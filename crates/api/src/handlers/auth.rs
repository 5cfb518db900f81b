//! Role lookup for external identities.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use sponsorhub_core::actor::Actor;
use sponsorhub_db::repositories::ActorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/auth/role/{userId}
///
/// Resolves an external user id to its marketplace role by profile
/// ownership. "No role" is a valid answer, not an error: the user has
/// authenticated but created neither profile yet.
pub async fn get_role(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = ActorRepo::resolve_profile(&state.pool, &user_id).await?;

    let body = match profile {
        Some(p) => match p.actor {
            Actor::Sponsor(id) => json!({
                "role": "sponsor",
                "sponsorId": id,
                "name": p.name,
            }),
            Actor::Publisher(id) => json!({
                "role": "publisher",
                "publisherId": id,
                "name": p.name,
            }),
            Actor::Unaffiliated => json!({ "role": null }),
        },
        None => json!({ "role": null }),
    };

    Ok(Json(body))
}
