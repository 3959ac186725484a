//! Handlers for roster bulk import and listing.
//!
//! Uploads arrive as the raw CSV file body. Parsing and validation run
//! synchronously inside the request; only the final batch insert touches
//! the store.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::Json;
use staffhub_core::error::CoreError;
use staffhub_core::roster::template::{csv_template, TEMPLATE_FILE_NAME};
use staffhub_core::roster::upload::{preview_upload, UploadPreview};
use staffhub_core::types::DbId;
use staffhub_db::models::employee::Employee;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/employees/import/template
///
/// Download the CSV template with the required columns and one example row.
pub async fn download_template() -> ([(HeaderName, String); 2], &'static str) {
    (
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TEMPLATE_FILE_NAME}\""),
            ),
        ],
        csv_template(),
    )
}

/// POST /api/v1/employees/import/preview
///
/// Parse and validate an uploaded file without persisting anything.
/// Malformed content is reported in `errors`, never as an HTTP failure.
pub async fn preview_import(body: Bytes) -> Json<DataResponse<UploadPreview>> {
    let preview = preview_upload(&body);
    tracing::debug!(
        rows = preview.rows.len(),
        errors = preview.errors.len(),
        "Roster upload previewed"
    );
    Json(DataResponse { data: preview })
}

/// POST /api/v1/employers/{employer_id}/employees/import
///
/// Validate the uploaded file and, if every row passes, create the whole
/// batch. Returns 422 with every row error when validation fails and a
/// single generic error when the store rejects the batch.
pub async fn import_employees(
    State(state): State<AppState>,
    Path(employer_id): Path<DbId>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Employee>>>)> {
    let preview = preview_upload(&body);

    if !preview.errors.is_empty() {
        tracing::info!(
            employer_id,
            error_count = preview.errors.len(),
            "Roster import rejected"
        );
        return Err(AppError::ImportRejected(preview.errors));
    }
    if preview.rows.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "CSV file contains no employee rows".to_string(),
        )));
    }

    let records = preview.records();
    let created = state
        .store
        .create_batch(employer_id, &records)
        .await
        .map_err(|e| AppError::UploadFailed(e.to_string()))?;

    tracing::info!(employer_id, count = created.len(), "Roster import committed");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/employers/{employer_id}/employees
///
/// List the employer's roster, oldest first.
pub async fn list_employees(
    State(state): State<AppState>,
    Path(employer_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Employee>>>> {
    let employees = state.store.list_for_employer(employer_id).await?;
    Ok(Json(DataResponse { data: employees }))
}
