//! Item endpoints (read-only)

use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::db::Session;
use crate::http::error::ApiError;
use crate::http::extractors::ItemId;
use crate::http::server::AppState;
use crate::models::Item;

/// GET /items - every stored item, storage order
async fn list_items(mut session: Session) -> Result<Json<Vec<Item>>, ApiError> {
    let items = session.items().list().await?;
    session.commit().await?;

    tracing::debug!(count = items.len(), "Listed items");
    Ok(Json(items))
}

/// GET /items/{item_id} - a single item
async fn get_item(ItemId(id): ItemId, mut session: Session) -> Result<Json<Item>, ApiError> {
    let item = session.items().get(id).await?;
    session.commit().await?;

    Ok(Json(item))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/{item_id}", get(get_item))
}
