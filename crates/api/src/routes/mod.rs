pub mod health;
pub mod roster;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees/import/template                       download CSV template (GET)
/// /employees/import/preview                        parse + validate upload (POST)
///
/// /employers/{employer_id}/employees               list roster (GET)
/// /employers/{employer_id}/employees/import        validate + create batch (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees/import", roster::import_router())
        .nest("/employers/{employer_id}/employees", roster::employer_router())
}
