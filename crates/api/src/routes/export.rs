use axum::{routing::get, Router};

use crate::handlers::export;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/spreadsheet", get(export::download_spreadsheet))
}
