//! Role resolution: maps an external user identity to its marketplace
//! profile in a single lookup.
//!
//! Profile creation enforces "at most one of sponsor/publisher per
//! identity", so the UNION below yields at most one row in practice; the
//! ordering keeps sponsor precedence should that invariant ever be
//! violated by out-of-band writes.

use sponsorhub_core::actor::Actor;
use sponsorhub_core::types::DbId;
use sqlx::PgPool;

/// A resolved profile: the actor plus its display name.
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub actor: Actor,
    pub name: String,
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    kind: String,
    id: DbId,
    name: String,
}

/// Resolves user identities to marketplace actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Look up the profile owning `user_id`, if any.
    pub async fn resolve_profile(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<ResolvedProfile>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT kind, id, name FROM (
                 SELECT 'sponsor' AS kind, id, name, 0 AS ord
                 FROM sponsors WHERE user_id = $1
                 UNION ALL
                 SELECT 'publisher' AS kind, id, name, 1 AS ord
                 FROM publishers WHERE user_id = $1
             ) AS profiles
             ORDER BY ord
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|r| {
            let actor = match r.kind.as_str() {
                "sponsor" => Actor::Sponsor(r.id),
                _ => Actor::Publisher(r.id),
            };
            ResolvedProfile {
                actor,
                name: r.name,
            }
        }))
    }

    /// Resolve `user_id` to an [`Actor`], defaulting to `Unaffiliated`.
    pub async fn resolve(pool: &PgPool, user_id: &str) -> Result<Actor, sqlx::Error> {
        Ok(Self::resolve_profile(pool, user_id)
            .await?
            .map(|p| p.actor)
            .unwrap_or(Actor::Unaffiliated))
    }
}
