//! Liveness and storage diagnostics endpoints.
//!
//! `/test` is the one place errors are swallowed and reported as data: a
//! health probe must describe a broken database, not fail with a 5xx of
//! its own.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::truncate;
use crate::state::AppState;

/// How many collection names the diagnostics report at most.
const COLLECTION_SAMPLE: i64 = 10;

/// Longest error detail reported as diagnostics text, in characters.
const ERROR_DETAIL_CHARS: usize = 80;

/// Liveness payload for `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Storycraft backend running",
    })
}

/// Storage connectivity report returned by `GET /test`.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    /// Process status; always `running` if this handler answered at all.
    pub backend: String,
    /// Storage status text, including captured error detail on failure.
    pub database: String,
    /// Whether `DATABASE_URL` was configured (`set` / `not set`).
    pub database_url: String,
    /// Name of the connected database, when reachable.
    pub database_name: Option<String>,
    pub connection_status: String,
    /// Up to ten collection names, when the database answers.
    pub collections: Vec<String>,
}

/// GET /test
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut report = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: if state.config.database_url.is_some() {
            "set"
        } else {
            "not set"
        }
        .to_string(),
        database_name: None,
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if !state.store.is_connected() {
        return Json(report);
    }
    report.database = "available".to_string();
    report.connection_status = "connected".to_string();

    match state.store.database_name().await {
        Ok(name) => report.database_name = Some(name),
        Err(err) => {
            report.database = format!(
                "connected but failing: {}",
                truncate(&err.to_string(), ERROR_DETAIL_CHARS)
            );
            return Json(report);
        }
    }

    match state.store.collections(COLLECTION_SAMPLE).await {
        Ok(collections) => {
            report.collections = collections;
            report.database = "connected and working".to_string();
        }
        Err(err) => {
            report.database = format!(
                "connected but failing: {}",
                truncate(&err.to_string(), ERROR_DETAIL_CHARS)
            );
        }
    }

    Json(report)
}
