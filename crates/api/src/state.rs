use std::sync::Arc;

use storycraft_db::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Request handlers reach the database only through the
/// `store` gateway, never through a raw connection handle.
#[derive(Clone)]
pub struct AppState {
    /// Document store gateway (possibly disconnected).
    pub store: DocumentStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
