use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use cinefront_core::models::CatalogItem;
use cinefront_core::services::WishlistStore;

use super::views::{CardView, cards};
use crate::{AppState, error::ApiError, error::ApiResult};

/// Run a wishlist mutation on the blocking pool; every change writes the storage file
async fn mutate<T, F>(state: Arc<AppState>, change: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut WishlistStore) -> cinefront_core::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || change(&mut state.wishlist_mut()))
        .await
        .map_err(|e| ApiError::internal(format!("Wishlist update failed: {}", e)))?
        .map_err(ApiError::from)
}

pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<CardView>> {
    let items = state.wishlist().items().to_vec();
    let saved: HashSet<i64> = items.iter().map(|item| item.id()).collect();
    Json(cards(items, &saved))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(item): Json<CatalogItem>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let saved = item.clone();
    let added = mutate(state, move |store| store.add(saved)).await?;

    let status = if added {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(json!({ "added": added, "item": item }))))
}

pub async fn contains(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Json<Value> {
    let in_my_list = state.wishlist().contains(id);
    Json(json!({ "id": id, "in_my_list": in_my_list }))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    mutate(state, move |store| store.remove(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
