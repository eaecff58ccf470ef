//! The document store abstraction and its degraded-mode wrapper.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::backend::memory::MemoryBackend;
use crate::backend::postgres::PostgresBackend;
use crate::DbPool;

/// Errors surfaced by storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The process started without a usable database connection.
    #[error("no database is configured")]
    NotConfigured,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A stored record: the generated id plus the record's fields.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub data: Value,
}

/// Backend contract for the document store.
///
/// `filter` is a JSON object of field/value pairs matched by exact-value
/// equality; an empty object matches every record in the collection. No
/// ordering is guaranteed beyond the backend's default.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Insert a record into the named collection, returning its generated id.
    async fn insert(&self, collection: &str, record: Value) -> Result<Uuid, StorageError>;

    /// Return up to `limit` records matching `filter`. An empty result is
    /// `Ok(vec![])`, not an error.
    async fn query(
        &self,
        collection: &str,
        filter: &Value,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError>;

    /// Names of up to `limit` non-empty collections, sorted.
    async fn collections(&self, limit: i64) -> Result<Vec<String>, StorageError>;

    /// Name of the underlying database, for diagnostics.
    async fn database_name(&self) -> Result<String, StorageError>;
}

/// Process-wide handle to the document store.
///
/// Cheaply cloneable. When constructed [`disconnected`](Self::disconnected)
/// (missing or failed `DATABASE_URL`), the process still runs; every
/// operation then fails with [`StorageError::NotConfigured`] instead of
/// crashing at startup.
#[derive(Clone)]
pub struct DocumentStore {
    backend: Option<Arc<dyn DocumentBackend>>,
}

impl DocumentStore {
    /// Store backed by the Postgres `documents` table.
    pub fn postgres(pool: DbPool) -> Self {
        Self {
            backend: Some(Arc::new(PostgresBackend::new(pool))),
        }
    }

    /// Store backed by process memory. Used by tests; clones share the data.
    pub fn in_memory() -> Self {
        Self {
            backend: Some(Arc::new(MemoryBackend::new())),
        }
    }

    /// Degraded-mode store with no backend at all.
    pub fn disconnected() -> Self {
        Self { backend: None }
    }

    pub fn is_connected(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> Result<&Arc<dyn DocumentBackend>, StorageError> {
        self.backend.as_ref().ok_or(StorageError::NotConfigured)
    }

    /// Insert a record into the named collection, returning its generated id.
    pub async fn insert(&self, collection: &str, record: Value) -> Result<Uuid, StorageError> {
        self.backend()?.insert(collection, record).await
    }

    /// Query up to `limit` records whose fields match `filter` exactly.
    pub async fn query(
        &self,
        collection: &str,
        filter: &Value,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        self.backend()?.query(collection, filter, limit).await
    }

    /// Names of up to `limit` non-empty collections.
    pub async fn collections(&self, limit: i64) -> Result<Vec<String>, StorageError> {
        self.backend()?.collections(limit).await
    }

    /// Name of the underlying database.
    pub async fn database_name(&self) -> Result<String, StorageError> {
        self.backend()?.database_name().await
    }
}
