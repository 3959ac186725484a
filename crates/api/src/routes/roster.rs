//! Route definitions for roster import and listing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::roster;
use crate::state::AppState;

/// Routes mounted at `/employees/import`.
///
/// ```text
/// GET    /template    -> download_template
/// POST   /preview     -> preview_import
/// ```
pub fn import_router() -> Router<AppState> {
    Router::new()
        .route("/template", get(roster::download_template))
        .route("/preview", post(roster::preview_import))
}

/// Routes mounted at `/employers/{employer_id}/employees`.
///
/// ```text
/// GET    /            -> list_employees
/// POST   /import      -> import_employees
/// ```
pub fn employer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(roster::list_employees))
        .route("/import", post(roster::import_employees))
}
