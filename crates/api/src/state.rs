use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable: the MongoDB client is an internally pooled
/// handle, and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// MongoDB client, created once at startup.
    pub client: roster_db::DbClient,
    /// Server configuration (database and collection names live here).
    pub config: Arc<ServerConfig>,
}
