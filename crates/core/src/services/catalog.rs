use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::{
    CatalogItemDetail, Film, FilmDetail, MediaKind, PagedResponse, Series, SeriesDetail,
    genre::{is_known_movie_genre, is_known_tv_genre},
};
use crate::services::fallback::{
    self, MAX_LIST_LEN, fallback_movie_details, fallback_movies, fallback_tv_details,
    fallback_tv_shows,
};
use crate::services::tmdb::{DEFAULT_RETRIES, RequestOptions, TmdbClient};

/// Upper bound for a single detail request
pub const DETAIL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieListing {
    Popular,
    NowPlaying,
    TopRated,
    Upcoming,
    Genre(i32),
}

impl MovieListing {
    pub fn endpoint(&self) -> String {
        match self {
            MovieListing::Popular => "/movie/popular?language=en-US&page=1".to_string(),
            MovieListing::NowPlaying => "/movie/now_playing?language=en-US&page=1".to_string(),
            MovieListing::TopRated => "/movie/top_rated?language=en-US&page=1".to_string(),
            MovieListing::Upcoming => "/movie/upcoming?language=en-US&page=1".to_string(),
            MovieListing::Genre(genre_id) => format!(
                "/discover/movie?with_genres={}&language=en-US&page=1&sort_by=popularity.desc",
                genre_id
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvListing {
    Popular,
    TopRated,
    OnTheAir,
    AiringToday,
    Genre(i32),
}

impl TvListing {
    pub fn endpoint(&self) -> String {
        match self {
            TvListing::Popular => "/tv/popular?language=en-US&page=1".to_string(),
            TvListing::TopRated => "/tv/top_rated?language=en-US&page=1".to_string(),
            TvListing::OnTheAir => "/tv/on_the_air?language=en-US&page=1".to_string(),
            TvListing::AiringToday => "/tv/airing_today?language=en-US&page=1".to_string(),
            TvListing::Genre(genre_id) => format!(
                "/discover/tv?with_genres={}&language=en-US&page=1&sort_by=popularity.desc",
                genre_id
            ),
        }
    }
}

/// Intent-level catalog queries.
///
/// Listing and search operations never fail: any upstream or configuration
/// problem is logged and answered with synthesized data. Detail operations
/// only fail with `Error::NotFound`, for identifiers nothing can be made of.
#[derive(Clone)]
pub struct CatalogService {
    tmdb: TmdbClient,
    detail_timeout: Duration,
}

impl CatalogService {
    pub fn new(tmdb: TmdbClient) -> Self {
        Self {
            tmdb,
            detail_timeout: DETAIL_TIMEOUT,
        }
    }

    pub fn with_detail_timeout(mut self, detail_timeout: Duration) -> Self {
        self.detail_timeout = detail_timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.tmdb.is_configured()
    }

    pub async fn movies(&self, listing: MovieListing) -> Vec<Film> {
        if let MovieListing::Genre(genre_id) = listing {
            if !is_known_movie_genre(genre_id) {
                tracing::debug!(genre_id, "Unknown movie genre, passing through to TMDB");
            }
        }

        match self
            .tmdb
            .get::<PagedResponse<Film>>(&listing.endpoint())
            .await
        {
            Ok(page) => {
                let mut results = page.results;
                results.truncate(MAX_LIST_LEN);
                tracing::info!(?listing, count = results.len(), "Fetched movies");
                results
            }
            Err(e) => {
                let fallback = fallback_movies();
                tracing::error!(
                    ?listing,
                    error = %e,
                    fallback_count = fallback.len(),
                    "Failed to fetch movies, using fallback data"
                );
                fallback
            }
        }
    }

    pub async fn popular_movies(&self) -> Vec<Film> {
        self.movies(MovieListing::Popular).await
    }

    pub async fn now_playing_movies(&self) -> Vec<Film> {
        self.movies(MovieListing::NowPlaying).await
    }

    pub async fn top_rated_movies(&self) -> Vec<Film> {
        self.movies(MovieListing::TopRated).await
    }

    pub async fn upcoming_movies(&self) -> Vec<Film> {
        self.movies(MovieListing::Upcoming).await
    }

    pub async fn movies_by_genre(&self, genre_id: i32) -> Vec<Film> {
        self.movies(MovieListing::Genre(genre_id)).await
    }

    pub async fn tv_shows(&self, listing: TvListing) -> Vec<Series> {
        if let TvListing::Genre(genre_id) = listing {
            if !is_known_tv_genre(genre_id) {
                tracing::debug!(genre_id, "Unknown TV genre, passing through to TMDB");
            }
        }

        match self
            .tmdb
            .get::<PagedResponse<Series>>(&listing.endpoint())
            .await
        {
            Ok(page) => {
                let mut results = page.results;
                results.truncate(MAX_LIST_LEN);
                tracing::info!(?listing, count = results.len(), "Fetched TV shows");
                results
            }
            Err(e) => {
                let fallback = fallback_tv_shows();
                tracing::error!(
                    ?listing,
                    error = %e,
                    fallback_count = fallback.len(),
                    "Failed to fetch TV shows, using fallback data"
                );
                fallback
            }
        }
    }

    pub async fn popular_tv_shows(&self) -> Vec<Series> {
        self.tv_shows(TvListing::Popular).await
    }

    pub async fn top_rated_tv_shows(&self) -> Vec<Series> {
        self.tv_shows(TvListing::TopRated).await
    }

    pub async fn on_the_air_tv_shows(&self) -> Vec<Series> {
        self.tv_shows(TvListing::OnTheAir).await
    }

    pub async fn airing_today_tv_shows(&self) -> Vec<Series> {
        self.tv_shows(TvListing::AiringToday).await
    }

    pub async fn tv_shows_by_genre(&self, genre_id: i32) -> Vec<Series> {
        self.tv_shows(TvListing::Genre(genre_id)).await
    }

    /// Film detail: one attempt bounded by the detail timeout, synthesized on failure
    pub async fn movie_details(&self, movie_id: &str) -> Result<FilmDetail> {
        let movie_id = movie_id.trim();
        if movie_id.is_empty() {
            return Err(Error::NotFound);
        }

        let endpoint = format!(
            "/movie/{}?language=en-US",
            urlencoding::encode(movie_id)
        );
        let options = RequestOptions {
            retries: 1,
            timeout: Some(self.detail_timeout),
        };

        match self.tmdb.get_with::<FilmDetail>(&endpoint, options).await {
            Ok(detail) => {
                tracing::info!(movie_id, title = %detail.film.title, "Fetched movie details");
                Ok(detail)
            }
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "Using fallback data for movie");
                fallback_movie_details(movie_id).ok_or(Error::NotFound)
            }
        }
    }

    /// Series detail: retried, each attempt bounded by the detail timeout, synthesized on failure
    pub async fn tv_details(&self, tv_id: &str) -> Result<SeriesDetail> {
        let tv_id = tv_id.trim();
        if tv_id.is_empty() {
            return Err(Error::NotFound);
        }

        let endpoint = format!("/tv/{}?language=en-US", urlencoding::encode(tv_id));
        let options = RequestOptions {
            retries: DEFAULT_RETRIES,
            timeout: Some(self.detail_timeout),
        };

        match self.tmdb.get_with::<SeriesDetail>(&endpoint, options).await {
            Ok(detail) => {
                tracing::info!(tv_id, name = %detail.series.name, "Fetched TV show details");
                Ok(detail)
            }
            Err(e) => {
                tracing::warn!(tv_id, error = %e, "Using fallback data for TV show");
                fallback_tv_details(tv_id).ok_or(Error::NotFound)
            }
        }
    }

    pub async fn details(&self, kind: MediaKind, id: &str) -> Result<CatalogItemDetail> {
        match kind {
            MediaKind::Movie => self.movie_details(id).await.map(CatalogItemDetail::Movie),
            MediaKind::Tv => self.tv_details(id).await.map(CatalogItemDetail::Tv),
        }
    }

    /// Upstream results are returned as-is; offline, the curated films are filtered locally
    pub async fn search_movies(&self, query: &str, page: Option<u32>) -> Vec<Film> {
        if query.trim().is_empty() {
            tracing::debug!("Empty movie search query");
            return Vec::new();
        }

        let endpoint = format!(
            "/search/movie?query={}&language=en-US&page={}",
            urlencoding::encode(query),
            page.unwrap_or(1).max(1)
        );

        match self.tmdb.get::<PagedResponse<Film>>(&endpoint).await {
            Ok(page) => {
                tracing::info!(query, count = page.results.len(), "Movie search");
                page.results
            }
            Err(e) => {
                let results = fallback::search_fallback_movies(query);
                tracing::warn!(
                    query,
                    error = %e,
                    count = results.len(),
                    "Movie search failed, searching fallback data"
                );
                results
            }
        }
    }

    /// Upstream results are returned as-is; offline, the curated series are filtered locally
    pub async fn search_tv_shows(&self, query: &str, page: Option<u32>) -> Vec<Series> {
        if query.trim().is_empty() {
            tracing::debug!("Empty TV search query");
            return Vec::new();
        }

        let endpoint = format!(
            "/search/tv?query={}&language=en-US&page={}",
            urlencoding::encode(query),
            page.unwrap_or(1).max(1)
        );

        match self.tmdb.get::<PagedResponse<Series>>(&endpoint).await {
            Ok(page) => {
                tracing::info!(query, count = page.results.len(), "TV search");
                page.results
            }
            Err(e) => {
                let results = fallback::search_fallback_tv_shows(query);
                tracing::warn!(
                    query,
                    error = %e,
                    count = results.len(),
                    "TV search failed, searching fallback data"
                );
                results
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{movie_genres, tv_genres};
    use crate::test_helpers::{MockUpstream, TEST_API_KEY, film_page, series_page};

    fn offline() -> CatalogService {
        CatalogService::new(TmdbClient::new(""))
    }

    fn online(upstream: &MockUpstream) -> CatalogService {
        CatalogService::new(
            TmdbClient::new(TEST_API_KEY)
                .with_base_url(upstream.base_url())
                .with_retry_delay(Duration::from_millis(5)),
        )
    }

    #[tokio::test]
    async fn test_unconfigured_listings_return_fallback() {
        let catalog = offline();
        assert!(!catalog.is_configured());

        assert_eq!(catalog.popular_movies().await, fallback_movies());
        assert_eq!(catalog.now_playing_movies().await, fallback_movies());
        assert_eq!(catalog.top_rated_movies().await, fallback_movies());
        assert_eq!(catalog.upcoming_movies().await, fallback_movies());
        assert_eq!(
            catalog.movies_by_genre(movie_genres::ROMANCE).await,
            fallback_movies()
        );

        assert_eq!(catalog.popular_tv_shows().await, fallback_tv_shows());
        assert_eq!(catalog.top_rated_tv_shows().await, fallback_tv_shows());
        assert_eq!(catalog.on_the_air_tv_shows().await, fallback_tv_shows());
        assert_eq!(catalog.airing_today_tv_shows().await, fallback_tv_shows());
        assert_eq!(
            catalog.tv_shows_by_genre(tv_genres::REALITY).await,
            fallback_tv_shows()
        );
    }

    #[tokio::test]
    async fn test_listing_truncates_to_twenty() {
        let upstream = MockUpstream::always(200, film_page(5000, 25)).await;
        let catalog = online(&upstream);

        let movies = catalog.popular_movies().await;

        assert_eq!(movies.len(), MAX_LIST_LEN);
        assert_eq!(movies[0].id, 5000);
        assert_eq!(
            upstream.requests()[0],
            format!("/movie/popular?language=en-US&page=1&api_key={}", TEST_API_KEY)
        );
    }

    #[tokio::test]
    async fn test_genre_listing_passes_unknown_ids_through() {
        let upstream = MockUpstream::always(200, series_page(9000, 3)).await;
        let catalog = online(&upstream);

        let shows = catalog.tv_shows_by_genre(424242).await;

        assert_eq!(shows.len(), 3);
        assert!(upstream.requests()[0].starts_with(
            "/discover/tv?with_genres=424242&language=en-US&page=1&sort_by=popularity.desc"
        ));
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_after_retries() {
        let upstream = MockUpstream::always(500, json!({"status_message": "down"})).await;
        let catalog = online(&upstream);

        let shows = catalog.top_rated_tv_shows().await;

        assert_eq!(shows, fallback_tv_shows());
        assert_eq!(upstream.hits(), DEFAULT_RETRIES as usize);
    }

    #[tokio::test]
    async fn test_concurrent_listings_fail_independently() {
        let upstream = MockUpstream::scripted(vec![
            (200, film_page(7000, 4)),
            (500, json!({})),
            (500, json!({})),
            (500, json!({})),
        ])
        .await;
        let catalog = CatalogService::new(
            TmdbClient::new(TEST_API_KEY)
                .with_base_url(upstream.base_url())
                .with_retry_delay(Duration::from_millis(5)),
        );

        let first = catalog.popular_movies().await;
        let (second, third) = tokio::join!(
            catalog.movies_by_genre(movie_genres::ACTION),
            catalog.movies_by_genre(movie_genres::DRAMA)
        );

        assert_eq!(first.len(), 4);
        assert_eq!(second, fallback_movies());
        assert_eq!(third, fallback_movies());
    }

    #[tokio::test]
    async fn test_empty_search_short_circuits() {
        let upstream = MockUpstream::always(200, film_page(1, 5)).await;
        let catalog = online(&upstream);

        assert!(catalog.search_movies("", None).await.is_empty());
        assert!(catalog.search_movies("   ", None).await.is_empty());
        assert!(catalog.search_tv_shows("\t", Some(2)).await.is_empty());
        assert_eq!(upstream.hits(), 0);
    }

    #[tokio::test]
    async fn test_search_returns_upstream_results_untruncated() {
        let upstream = MockUpstream::always(200, film_page(300, 25)).await;
        let catalog = online(&upstream);

        let results = catalog.search_movies("star wars", Some(2)).await;

        assert_eq!(results.len(), 25);
        assert_eq!(
            upstream.requests()[0],
            format!(
                "/search/movie?query=star%20wars&language=en-US&page=2&api_key={}",
                TEST_API_KEY
            )
        );
    }

    #[tokio::test]
    async fn test_offline_search_filters_curated_pool() {
        let catalog = offline();

        let movies = catalog.search_movies("Matrix", None).await;
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "The Matrix");

        let shows = catalog.search_tv_shows("bounty hunter", None).await;
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].name, "The Mandalorian");

        assert!(catalog.search_movies("no such title", None).await.is_empty());
    }

    #[tokio::test]
    async fn test_movie_details_from_upstream() {
        let upstream = MockUpstream::always(
            200,
            json!({
                "id": 550,
                "title": "Fight Club",
                "overview": "A ticking-time-bomb insomniac...",
                "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
                "backdrop_path": null,
                "release_date": "1999-10-15",
                "vote_average": 8.4,
                "runtime": 139,
                "status": "Released"
            }),
        )
        .await;
        let catalog = online(&upstream);

        let detail = catalog.movie_details("550").await.unwrap();

        assert_eq!(detail.film.title, "Fight Club");
        assert_eq!(detail.runtime, Some(139));
        assert_eq!(
            upstream.requests()[0],
            format!("/movie/550?language=en-US&api_key={}", TEST_API_KEY)
        );
    }

    #[tokio::test]
    async fn test_movie_details_make_a_single_attempt() {
        let upstream = MockUpstream::always(404, json!({"status_message": "missing"})).await;
        let catalog = online(&upstream);

        let detail = catalog.movie_details("550").await.unwrap();

        assert_eq!(upstream.hits(), 1);
        assert_eq!(detail, fallback_movie_details("550").unwrap());
    }

    #[tokio::test]
    async fn test_detail_timeout_falls_back() {
        let upstream = MockUpstream::delayed(Duration::from_millis(400), json!({"id": 550})).await;
        let catalog = online(&upstream).with_detail_timeout(Duration::from_millis(30));

        let detail = catalog.movie_details("550").await.unwrap();

        assert_eq!(detail.film.id, 550);
        assert_eq!(detail.film.title, "Pulp Fiction (2000)");
    }

    #[tokio::test]
    async fn test_unconfigured_series_detail_is_synthesized() {
        let catalog = offline();

        let detail = catalog.tv_details("42").await.unwrap();

        assert_eq!(detail.series.id, 42);
        assert!(detail.series.name.ends_with("(2002)"));
        assert_eq!(detail, fallback_tv_details("42").unwrap());
    }

    #[tokio::test]
    async fn test_details_dispatch_by_kind() {
        let catalog = offline();

        let movie = catalog.details(MediaKind::Movie, "7").await.unwrap();
        let show = catalog.details(MediaKind::Tv, "7").await.unwrap();

        assert_eq!(movie.kind(), MediaKind::Movie);
        assert_eq!(show.kind(), MediaKind::Tv);
        assert_eq!(movie.id(), 7);
        assert_eq!(show.id(), 7);
    }

    #[tokio::test]
    async fn test_blank_detail_id_is_not_found() {
        let upstream = MockUpstream::always(200, json!({})).await;
        let catalog = online(&upstream);

        assert!(matches!(catalog.movie_details("").await, Err(Error::NotFound)));
        assert!(matches!(catalog.tv_details("  ").await, Err(Error::NotFound)));
        assert_eq!(upstream.hits(), 0);
    }
}
