//! In-memory document store backend.
//!
//! Keeps collections in a `HashMap` behind a read-write lock. No
//! persistence across restarts; used by tests and local development where a
//! database is not available.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{Document, DocumentBackend, StorageError};

pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact-value equality on every field named by the filter. A filter that
/// is not a JSON object matches everything.
fn matches(data: &Value, filter: &Value) -> bool {
    match filter.as_object() {
        Some(fields) => fields.iter().all(|(key, value)| data.get(key) == Some(value)),
        None => true,
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn insert(&self, collection: &str, record: Value) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document { id, data: record });
        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        filter: &Value,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches(&document.data, filter))
                    .take(limit.max(0) as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    async fn collections(&self, limit: i64) -> Result<Vec<String>, StorageError> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        names.truncate(limit.max(0) as usize);
        Ok(names)
    }

    async fn database_name(&self) -> Result<String, StorageError> {
        Ok("memory".to_string())
    }
}
