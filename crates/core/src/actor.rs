//! Marketplace actor: the result of resolving an authenticated identity
//! to its owning Sponsor or Publisher record.
//!
//! There is no role column anywhere; a user's role is derived entirely
//! from which profile table references their `user_id`. The invariant
//! "at most one of sponsor/publisher per identity" is enforced at
//! profile-creation time, so resolution yields exactly one variant.

use crate::types::DbId;

/// The resolved role of an authenticated caller.
///
/// Resolved once per request by the auth extractor and threaded through
/// handlers; never re-derived ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// Caller owns the sponsor profile with this id.
    Sponsor(DbId),
    /// Caller owns the publisher profile with this id.
    Publisher(DbId),
    /// Authenticated but owns neither profile. A valid terminal state:
    /// the user has signed up but not yet created a marketplace profile.
    Unaffiliated,
}

impl Actor {
    /// The caller's sponsor id, if they are a sponsor.
    pub fn sponsor_id(&self) -> Option<DbId> {
        match self {
            Actor::Sponsor(id) => Some(*id),
            _ => None,
        }
    }

    /// The caller's publisher id, if they are a publisher.
    pub fn publisher_id(&self) -> Option<DbId> {
        match self {
            Actor::Publisher(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether the caller owns the sponsor profile `sponsor_id`.
    pub fn owns_sponsor(&self, sponsor_id: DbId) -> bool {
        matches!(self, Actor::Sponsor(id) if *id == sponsor_id)
    }

    /// Whether the caller owns the publisher profile `publisher_id`.
    pub fn owns_publisher(&self, publisher_id: DbId) -> bool {
        matches!(self, Actor::Publisher(id) if *id == publisher_id)
    }

    /// Whether the caller holds any marketplace profile.
    pub fn is_affiliated(&self) -> bool {
        !matches!(self, Actor::Unaffiliated)
    }

    /// Lowercase role name as exposed by `GET /api/auth/role/{userId}`.
    pub fn role_name(&self) -> Option<&'static str> {
        match self {
            Actor::Sponsor(_) => Some("sponsor"),
            Actor::Publisher(_) => Some("publisher"),
            Actor::Unaffiliated => None,
        }
    }
}
