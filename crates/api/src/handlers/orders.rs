//! Handlers for the `/orders` resource: intake, listing, status lookup.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use storycraft_core::error::CoreError;
use storycraft_core::order::{
    CreateStoryOrder, OrderStage, OrderStatus, ORDERS_COLLECTION, STATUSES_COLLECTION,
};
use storycraft_db::StorageError;

use crate::error::AppResult;
use crate::state::AppState;

/// Fixed cap on listed orders; there is no pagination beyond it.
const LIST_LIMIT: i64 = 50;

/// Response body for a successful order submission.
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub status: OrderStage,
}

/// POST /api/orders
///
/// Validates the submission, persists the order, then writes the initial
/// `received` status record. The two inserts are not transactional: if the
/// status insert fails the order remains persisted without a status record.
pub async fn create(
    State(state): State<AppState>,
    Json(submission): Json<CreateStoryOrder>,
) -> AppResult<Json<CreateOrderResponse>> {
    let order = submission.validate()?;

    let record = serde_json::to_value(&order).map_err(StorageError::from)?;
    let order_id = state.store.insert(ORDERS_COLLECTION, record).await?;

    let status = OrderStatus::received(order_id.to_string());
    let status_record = serde_json::to_value(&status).map_err(StorageError::from)?;
    state.store.insert(STATUSES_COLLECTION, status_record).await?;

    tracing::info!(%order_id, tier = order.tier.as_str(), "Story order received");

    Ok(Json(CreateOrderResponse {
        order_id: status.order_id,
        status: status.status,
    }))
}

/// GET /api/orders
///
/// Up to 50 stored order records, each carrying its generated id as a
/// string `id` field. No filtering, no ordering guarantee.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    let documents = state
        .store
        .query(ORDERS_COLLECTION, &json!({}), LIST_LIMIT)
        .await?;

    let records = documents
        .into_iter()
        .map(|document| {
            let mut record = document.data;
            if let Some(fields) = record.as_object_mut() {
                fields.insert("id".to_string(), Value::String(document.id.to_string()));
            }
            record
        })
        .collect();

    Ok(Json(records))
}

/// GET /api/orders/{order_id}
///
/// Looks up the order's fulfillment status record; 404 if none exists.
pub async fn get_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<OrderStatus>> {
    let filter = json!({ "order_id": &order_id });
    let mut matches = state.store.query(STATUSES_COLLECTION, &filter, 1).await?;

    let document = matches.pop().ok_or(CoreError::NotFound {
        entity: "OrderStatus",
        id: order_id,
    })?;

    let status: OrderStatus =
        serde_json::from_value(document.data).map_err(StorageError::from)?;
    Ok(Json(status))
}
