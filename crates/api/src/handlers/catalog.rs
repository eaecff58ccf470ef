//! Handlers for the static catalog endpoints.
//!
//! Both lists are code-defined constants; no state, no failure mode.

use axum::Json;
use storycraft_core::catalog::{self, Character, Tier};

/// GET /api/tiers
pub async fn list_tiers() -> Json<Vec<Tier>> {
    Json(catalog::tiers())
}

/// GET /api/characters
pub async fn list_characters() -> Json<Vec<Character>> {
    Json(catalog::characters())
}
