use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sponsorhub_core::error::CoreError;
use sponsorhub_core::types::DbId;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Requires the caller to hold a sponsor profile. Rejects with 403 otherwise.
#[derive(Debug, Clone)]
pub struct RequireSponsor {
    pub user: AuthUser,
    pub sponsor_id: DbId,
}

/// Requires the caller to hold a publisher profile. Rejects with 403 otherwise.
#[derive(Debug, Clone)]
pub struct RequirePublisher {
    pub user: AuthUser,
    pub publisher_id: DbId,
}

impl FromRequestParts<AppState> for RequireSponsor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let sponsor_id = user.actor.sponsor_id().ok_or_else(|| {
            AppError::Core(CoreError::Forbidden("Sponsor role required".to_string()))
        })?;
        Ok(RequireSponsor { user, sponsor_id })
    }
}

impl FromRequestParts<AppState> for RequirePublisher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let publisher_id = user.actor.publisher_id().ok_or_else(|| {
            AppError::Core(CoreError::Forbidden("Publisher role required".to_string()))
        })?;
        Ok(RequirePublisher { user, publisher_id })
    }
}
