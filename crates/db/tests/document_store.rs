//! Contract tests for the document store, run against the in-memory
//! backend and the degraded (disconnected) mode.

use serde_json::json;
use storycraft_db::{DocumentStore, StorageError};

#[tokio::test]
async fn insert_returns_unique_ids() {
    let store = DocumentStore::in_memory();

    let a = store.insert("storyorder", json!({"n": 1})).await.unwrap();
    let b = store.insert("storyorder", json!({"n": 2})).await.unwrap();

    assert_ne!(a, b);
}

#[tokio::test]
async fn query_matches_on_exact_field_values() {
    let store = DocumentStore::in_memory();
    store
        .insert("orderstatus", json!({"order_id": "a", "status": "received"}))
        .await
        .unwrap();
    store
        .insert("orderstatus", json!({"order_id": "b", "status": "ready"}))
        .await
        .unwrap();

    let matches = store
        .query("orderstatus", &json!({"order_id": "b"}), 10)
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].data["status"], "ready");
}

#[tokio::test]
async fn empty_filter_matches_every_record() {
    let store = DocumentStore::in_memory();
    for n in 0..3 {
        store.insert("storyorder", json!({"n": n})).await.unwrap();
    }

    let all = store.query("storyorder", &json!({}), 10).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn query_honors_the_limit() {
    let store = DocumentStore::in_memory();
    for n in 0..10 {
        store.insert("storyorder", json!({"n": n})).await.unwrap();
    }

    let capped = store.query("storyorder", &json!({}), 4).await.unwrap();
    assert_eq!(capped.len(), 4);
}

#[tokio::test]
async fn no_match_is_an_empty_result_not_an_error() {
    let store = DocumentStore::in_memory();

    let missing_collection = store.query("storyorder", &json!({}), 10).await.unwrap();
    assert!(missing_collection.is_empty());

    store.insert("storyorder", json!({"n": 1})).await.unwrap();
    let no_match = store
        .query("storyorder", &json!({"n": 99}), 10)
        .await
        .unwrap();
    assert!(no_match.is_empty());
}

#[tokio::test]
async fn collections_are_sorted_and_capped() {
    let store = DocumentStore::in_memory();
    store.insert("storyorder", json!({})).await.unwrap();
    store.insert("orderstatus", json!({})).await.unwrap();

    let names = store.collections(10).await.unwrap();
    assert_eq!(names, vec!["orderstatus".to_string(), "storyorder".to_string()]);

    let capped = store.collections(1).await.unwrap();
    assert_eq!(capped, vec!["orderstatus".to_string()]);
}

#[tokio::test]
async fn clones_share_the_same_data() {
    let store = DocumentStore::in_memory();
    let clone = store.clone();

    store.insert("storyorder", json!({"n": 1})).await.unwrap();

    let seen = clone.query("storyorder", &json!({}), 10).await.unwrap();
    assert_eq!(seen.len(), 1);
}

#[tokio::test]
async fn disconnected_store_fails_explicitly() {
    let store = DocumentStore::disconnected();
    assert!(!store.is_connected());

    let insert = store.insert("storyorder", json!({})).await;
    assert!(matches!(insert, Err(StorageError::NotConfigured)));

    let query = store.query("storyorder", &json!({}), 10).await;
    assert!(matches!(query, Err(StorageError::NotConfigured)));

    let collections = store.collections(10).await;
    assert!(matches!(collections, Err(StorageError::NotConfigured)));

    let name = store.database_name().await;
    assert!(matches!(name, Err(StorageError::NotConfigured)));
}

#[tokio::test]
async fn memory_backend_reports_its_name() {
    let store = DocumentStore::in_memory();
    assert!(store.is_connected());
    assert_eq!(store.database_name().await.unwrap(), "memory");
}
