use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use futures::future::join_all;
use serde::Deserialize;

use cinefront_core::models::{genre_label, movie_genres, tv_genres};
use cinefront_core::services::{CatalogService, MovieListing, TvListing};

use super::views::{CardView, HERO_LEN, PageView, RowView, cards};
use crate::AppState;

const HOME_ROWS: &[(&str, MovieListing)] = &[
    ("Popular Now", MovieListing::Popular),
    ("Romance", MovieListing::Genre(movie_genres::ROMANCE)),
    ("Action", MovieListing::Genre(movie_genres::ACTION)),
    ("Comedy", MovieListing::Genre(movie_genres::COMEDY)),
    ("Drama", MovieListing::Genre(movie_genres::DRAMA)),
];

const MOVIE_ROWS: &[(&str, MovieListing)] = &[
    ("Popular Movies", MovieListing::Popular),
    ("Now Playing", MovieListing::NowPlaying),
    ("Top Rated", MovieListing::TopRated),
    ("Upcoming", MovieListing::Upcoming),
    ("Action Movies", MovieListing::Genre(movie_genres::ACTION)),
    ("Comedy Movies", MovieListing::Genre(movie_genres::COMEDY)),
    ("Drama Movies", MovieListing::Genre(movie_genres::DRAMA)),
    ("Thriller Movies", MovieListing::Genre(movie_genres::THRILLER)),
    ("Sci-Fi Movies", MovieListing::Genre(movie_genres::SCIENCE_FICTION)),
    ("Romance Movies", MovieListing::Genre(movie_genres::ROMANCE)),
    ("Horror Movies", MovieListing::Genre(movie_genres::HORROR)),
    ("Adventure Movies", MovieListing::Genre(movie_genres::ADVENTURE)),
];

const TV_ROWS: &[(&str, TvListing)] = &[
    ("Popular TV Shows", TvListing::Popular),
    ("Top Rated TV Shows", TvListing::TopRated),
    ("Currently Airing", TvListing::OnTheAir),
    ("Airing Today", TvListing::AiringToday),
    ("Drama Series", TvListing::Genre(tv_genres::DRAMA)),
    ("Comedy Series", TvListing::Genre(tv_genres::COMEDY)),
    ("Action & Adventure", TvListing::Genre(tv_genres::ACTION_ADVENTURE)),
    ("Sci-Fi & Fantasy", TvListing::Genre(tv_genres::SCI_FI_FANTASY)),
    ("Crime & Mystery", TvListing::Genre(tv_genres::CRIME)),
    ("Animation", TvListing::Genre(tv_genres::ANIMATION)),
    ("Mystery", TvListing::Genre(tv_genres::MYSTERY)),
    ("Documentary", TvListing::Genre(tv_genres::DOCUMENTARY)),
    ("Reality TV", TvListing::Genre(tv_genres::REALITY)),
    ("Family", TvListing::Genre(tv_genres::FAMILY)),
];

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Narrow the page to a single genre row
    pub genre: Option<i32>,
}

fn genre_title(genre_id: i32) -> String {
    genre_label(genre_id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Genre {}", genre_id))
}

/// Fetch every row concurrently; each row falls back on its own
async fn movie_rows(
    catalog: &CatalogService,
    rows: &[(String, MovieListing)],
    saved: &HashSet<i64>,
) -> Vec<RowView> {
    let fetched = join_all(
        rows.iter()
            .map(|(title, listing)| async move { (title.clone(), catalog.movies(*listing).await) }),
    )
    .await;

    fetched
        .into_iter()
        .map(|(title, films)| RowView {
            title,
            items: cards(films, saved),
        })
        .collect()
}

async fn tv_rows(
    catalog: &CatalogService,
    rows: &[(String, TvListing)],
    saved: &HashSet<i64>,
) -> Vec<RowView> {
    let fetched = join_all(
        rows.iter()
            .map(|(title, listing)| async move { (title.clone(), catalog.tv_shows(*listing).await) }),
    )
    .await;

    fetched
        .into_iter()
        .map(|(title, shows)| RowView {
            title,
            items: cards(shows, saved),
        })
        .collect()
}

fn owned<L: Copy>(rows: &[(&str, L)]) -> Vec<(String, L)> {
    rows.iter()
        .map(|(title, listing)| (title.to_string(), *listing))
        .collect()
}

fn hero_from(rows: &[RowView], saved: &HashSet<i64>) -> Vec<CardView> {
    rows.first()
        .map(|row| {
            row.items
                .iter()
                .take(HERO_LEN)
                .map(|card| CardView::new(card.item.clone(), saved))
                .collect()
        })
        .unwrap_or_default()
}

pub async fn home(State(state): State<Arc<AppState>>) -> Json<PageView> {
    let saved = state.saved_ids();
    let rows = movie_rows(&state.catalog, &owned(HOME_ROWS), &saved).await;

    Json(PageView {
        hero: hero_from(&rows, &saved),
        rows,
        tmdb_configured: state.catalog.is_configured(),
    })
}

pub async fn movies_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<PageView> {
    let saved = state.saved_ids();
    let layout = match query.genre {
        Some(genre_id) => vec![(genre_title(genre_id), MovieListing::Genre(genre_id))],
        None => owned(MOVIE_ROWS),
    };
    let rows = movie_rows(&state.catalog, &layout, &saved).await;

    Json(PageView {
        hero: hero_from(&rows, &saved),
        rows,
        tmdb_configured: state.catalog.is_configured(),
    })
}

pub async fn tv_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Json<PageView> {
    let saved = state.saved_ids();
    let layout = match query.genre {
        Some(genre_id) => vec![(genre_title(genre_id), TvListing::Genre(genre_id))],
        None => owned(TV_ROWS),
    };
    let rows = tv_rows(&state.catalog, &layout, &saved).await;

    Json(PageView {
        hero: hero_from(&rows, &saved),
        rows,
        tmdb_configured: state.catalog.is_configured(),
    })
}
