use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Constructed explicitly at startup and injected into the router; there
/// is no ambient global store handle anywhere.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sponsorhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
