use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use super::views::{CardView, cards};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub movies: Vec<CardView>,
    pub tv: Vec<CardView>,
    pub total_results: usize,
    pub tmdb_configured: bool,
}

/// Search films and series side by side
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let query = params.q.trim().to_string();
    let (films, shows) = tokio::join!(
        state.catalog.search_movies(&query, params.page),
        state.catalog.search_tv_shows(&query, params.page),
    );

    let saved = state.saved_ids();
    let movies = cards(films, &saved);
    let tv = cards(shows, &saved);

    Json(SearchResponse {
        total_results: movies.len() + tv.len(),
        query,
        movies,
        tv,
        tmdb_configured: state.catalog.is_configured(),
    })
}
