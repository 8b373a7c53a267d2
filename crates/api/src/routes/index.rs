use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Text returned by `GET /`.
pub const SERVICE_DESCRIPTION: &str =
    "MongoDB users -> Spreadsheet service. GET /spreadsheet to download.";

#[derive(Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
}

/// GET / -- describes the service.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: SERVICE_DESCRIPTION,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
