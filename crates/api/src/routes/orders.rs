//! Route definitions for story orders.

use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// POST /orders              -> create
/// GET  /orders              -> list
/// GET  /orders/{order_id}   -> get_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/{order_id}", get(orders::get_status))
}
