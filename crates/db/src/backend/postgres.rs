//! Postgres-backed document store.
//!
//! All collections share one `documents` table (see `db/migrations`): the
//! collection name is a column, the record itself is JSONB. Exact-value
//! field filters map to JSONB containment (`data @> filter`), which the GIN
//! index on `data` serves.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::store::{Document, DocumentBackend, StorageError};
use crate::DbPool;

pub struct PostgresBackend {
    pool: DbPool,
}

impl PostgresBackend {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// A row from the `documents` table.
#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    data: Value,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            data: row.data,
        }
    }
}

#[async_trait]
impl DocumentBackend for PostgresBackend {
    async fn insert(&self, collection: &str, record: Value) -> Result<Uuid, StorageError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO documents (collection, data) VALUES ($1, $2) RETURNING id",
        )
        .bind(collection)
        .bind(&record)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(collection, %id, "Inserted document");
        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        filter: &Value,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = $1 AND data @> $2 LIMIT $3",
        )
        .bind(collection)
        .bind(filter)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn collections(&self, limit: i64) -> Result<Vec<String>, StorageError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    async fn database_name(&self) -> Result<String, StorageError> {
        let name = sqlx::query_scalar::<_, String>("SELECT current_database()")
            .fetch_one(&self.pool)
            .await?;

        Ok(name)
    }
}
