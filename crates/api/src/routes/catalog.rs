//! Route definitions for the static catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET /tiers        -> list_tiers
/// GET /characters   -> list_characters
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tiers", get(catalog::list_tiers))
        .route("/characters", get(catalog::list_characters))
}
