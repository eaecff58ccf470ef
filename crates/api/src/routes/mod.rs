pub mod catalog;
pub mod diagnostics;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /tiers               static pricing tiers
/// /characters          static character catalog
/// /orders              create (POST), list (GET)
/// /orders/{order_id}   fulfillment status lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(catalog::router()).merge(orders::router())
}
