//! Handler for the users spreadsheet download.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use roster_core::export::{ExportDocument, FILE_NAME, XLSX_MIME_TYPE};
use roster_core::spreadsheet::write_xlsx;
use roster_db::repositories::UserRecordRepo;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /spreadsheet
// ---------------------------------------------------------------------------

/// Export the whole users collection as an `.xlsx` attachment.
///
/// The collection is read in full, normalized, and serialized in memory
/// before anything is sent.
pub async fn download_spreadsheet(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let collection = roster_db::users_collection(
        &state.client,
        &state.config.db_name,
        &state.config.collection_name,
    );

    let records = UserRecordRepo::list_raw_records(&collection).await?;
    let document = ExportDocument::from_records(records);
    let bytes = write_xlsx(&document)?;

    tracing::info!(
        rows = document.len(),
        bytes = bytes.len(),
        collection = %state.config.collection_name,
        "Spreadsheet export generated",
    );

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, XLSX_MIME_TYPE.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{FILE_NAME}\""),
            ),
        ],
        bytes,
    ))
}
