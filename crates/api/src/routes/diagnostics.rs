//! Route definitions for liveness and diagnostics (root-level, NOT under `/api`).

use axum::routing::get;
use axum::Router;

use crate::handlers::diagnostics;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /       -> liveness message
/// GET /test   -> storage diagnostics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(diagnostics::root))
        .route("/test", get(diagnostics::test_database))
}
