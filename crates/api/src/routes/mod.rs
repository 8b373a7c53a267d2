pub mod export;
pub mod health;
pub mod index;

use axum::Router;

use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// /                  service description
/// /health            service and database health
/// /spreadsheet       users.xlsx download
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(health::router())
        .merge(export::router())
}
