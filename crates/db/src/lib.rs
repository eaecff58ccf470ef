//! Storage gateway for the Storycraft backend.
//!
//! Exposes a thin document-store abstraction ([`DocumentStore`]) over an
//! external database: insert one record into a named collection, query
//! records matching an exact-value filter up to a limit. The concrete
//! backend is pluggable; production uses Postgres with a single JSONB
//! `documents` table, tests use an in-memory backend.

use sqlx::postgres::PgPoolOptions;

pub mod backend;
pub mod store;

pub use store::{Document, DocumentBackend, DocumentStore, StorageError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
