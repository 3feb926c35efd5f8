use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use cinefront_core::models::MediaKind;
use cinefront_core::services::TvListing;

use super::views::{CardView, DetailView, cards};
use crate::{AppState, error::ApiError, error::ApiResult};

fn parse_listing(slug: &str) -> Option<TvListing> {
    match slug {
        "popular" => Some(TvListing::Popular),
        "top_rated" => Some(TvListing::TopRated),
        "on_the_air" => Some(TvListing::OnTheAir),
        "airing_today" => Some(TvListing::AiringToday),
        _ => None,
    }
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(listing): Path<String>,
) -> ApiResult<Json<Vec<CardView>>> {
    let listing = parse_listing(&listing)
        .ok_or_else(|| ApiError::not_found(format!("Unknown TV list: {}", listing)))?;

    let shows = state.catalog.tv_shows(listing).await;
    Ok(Json(cards(shows, &state.saved_ids())))
}

pub async fn by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre_id): Path<i32>,
) -> Json<Vec<CardView>> {
    let shows = state.catalog.tv_shows_by_genre(genre_id).await;
    Json(cards(shows, &state.saved_ids()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DetailView>> {
    let detail = state.catalog.details(MediaKind::Tv, &id).await?;
    Ok(Json(DetailView::new(detail, &state.saved_ids())))
}
