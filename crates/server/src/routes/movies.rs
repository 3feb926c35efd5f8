use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use cinefront_core::models::MediaKind;
use cinefront_core::services::MovieListing;

use super::views::{CardView, DetailView, cards};
use crate::{AppState, error::ApiError, error::ApiResult};

fn parse_listing(slug: &str) -> Option<MovieListing> {
    match slug {
        "popular" => Some(MovieListing::Popular),
        "now_playing" => Some(MovieListing::NowPlaying),
        "top_rated" => Some(MovieListing::TopRated),
        "upcoming" => Some(MovieListing::Upcoming),
        _ => None,
    }
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(listing): Path<String>,
) -> ApiResult<Json<Vec<CardView>>> {
    let listing = parse_listing(&listing)
        .ok_or_else(|| ApiError::not_found(format!("Unknown movie list: {}", listing)))?;

    let films = state.catalog.movies(listing).await;
    Ok(Json(cards(films, &state.saved_ids())))
}

pub async fn by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre_id): Path<i32>,
) -> Json<Vec<CardView>> {
    let films = state.catalog.movies_by_genre(genre_id).await;
    Json(cards(films, &state.saved_ids()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DetailView>> {
    let detail = state.catalog.details(MediaKind::Movie, &id).await?;
    Ok(Json(DetailView::new(detail, &state.saved_ids())))
}
