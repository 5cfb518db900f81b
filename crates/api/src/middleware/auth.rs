use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sponsorhub_core::actor::Actor;
use sponsorhub_core::error::CoreError;
use sponsorhub_core::types::UserId;
use sponsorhub_db::repositories::{ActorRepo, SessionRepo};

use crate::error::AppError;
use crate::state::AppState;

/// An authenticated user, resolved from a `Bearer` session token.
///
/// Extraction fails with 401 when the `Authorization` header is missing
/// or the token does not match an active session. On success the user's
/// marketplace role is resolved by profile lookup: a user is a sponsor
/// or publisher solely by owning the matching profile row, never by a
/// role claim on the session itself.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub actor: Actor,
}

/// An optional authenticated user.
///
/// Yields `None` when no `Authorization` header is present or the token
/// is unknown or expired; database failures still propagate as errors.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".to_string(),
            ))
        })?;

        let session = SessionRepo::find_active_by_token(&state.pool, token)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid or expired session".to_string(),
                ))
            })?;

        let actor = ActorRepo::resolve(&state.pool, &session.user_id).await?;

        Ok(AuthUser {
            user_id: session.user_id,
            actor,
        })
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(MaybeAuthUser(None));
        };

        let Some(session) = SessionRepo::find_active_by_token(&state.pool, token).await? else {
            return Ok(MaybeAuthUser(None));
        };

        let actor = ActorRepo::resolve(&state.pool, &session.user_id).await?;

        Ok(MaybeAuthUser(Some(AuthUser {
            user_id: session.user_id,
            actor,
        })))
    }
}
