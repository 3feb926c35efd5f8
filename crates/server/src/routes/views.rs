//! JSON view models handed to the front end.

use std::collections::HashSet;

use serde::Serialize;

use cinefront_core::models::{CatalogItem, CatalogItemDetail, format_rating};
use cinefront_core::services::{ImageSize, image_url};

/// Number of popular items rotated through the hero banner
pub const HERO_LEN: usize = 6;

#[derive(Debug, Serialize)]
pub struct CardView {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub poster_url: String,
    pub backdrop_url: String,
    pub rating: String,
    /// Item comes from the offline pool rather than the live catalog
    pub synthetic: bool,
    pub in_my_list: bool,
}

impl CardView {
    pub fn new(item: CatalogItem, saved: &HashSet<i64>) -> Self {
        Self {
            poster_url: image_url(item.poster_path(), ImageSize::W500),
            backdrop_url: image_url(item.backdrop_path(), ImageSize::W1280),
            rating: format_rating(item.vote_average()),
            synthetic: item.is_synthetic(),
            in_my_list: saved.contains(&item.id()),
            item,
        }
    }
}

pub fn cards<T: Into<CatalogItem>>(items: Vec<T>, saved: &HashSet<i64>) -> Vec<CardView> {
    items
        .into_iter()
        .map(|item| CardView::new(item.into(), saved))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct RowView {
    pub title: String,
    pub items: Vec<CardView>,
}

#[derive(Debug, Serialize)]
pub struct PageView {
    pub hero: Vec<CardView>,
    pub rows: Vec<RowView>,
    pub tmdb_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct DetailView {
    #[serde(flatten)]
    pub detail: CatalogItemDetail,
    pub poster_url: String,
    pub backdrop_url: String,
    pub rating: String,
    pub in_my_list: bool,
}

impl DetailView {
    pub fn new(detail: CatalogItemDetail, saved: &HashSet<i64>) -> Self {
        let (poster_path, backdrop_path, vote_average) = match &detail {
            CatalogItemDetail::Movie(d) => (
                d.film.poster_path.as_deref(),
                d.film.backdrop_path.as_deref(),
                d.film.vote_average,
            ),
            CatalogItemDetail::Tv(d) => (
                d.series.poster_path.as_deref(),
                d.series.backdrop_path.as_deref(),
                d.series.vote_average,
            ),
        };

        Self {
            poster_url: image_url(poster_path, ImageSize::W500),
            backdrop_url: image_url(backdrop_path, ImageSize::Original),
            rating: format_rating(vote_average),
            in_my_list: saved.contains(&detail.id()),
            detail,
        }
    }
}
