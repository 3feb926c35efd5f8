use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{Json, Router, extract::State, routing::get};
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use cinefront_core::{
    Config,
    services::{CatalogService, TmdbClient, WishlistStore},
    storage::FileStorage,
};

pub mod error;
pub mod routes;

pub use error::{ApiError, ApiResult};

use routes::{browse, movies, mylist, search, tv};

pub struct AppState {
    pub catalog: CatalogService,
    wishlist: RwLock<WishlistStore>,
}

impl AppState {
    pub fn new(catalog: CatalogService, wishlist: WishlistStore) -> Self {
        Self {
            catalog,
            wishlist: RwLock::new(wishlist),
        }
    }

    // A poisoned lock still guards a consistent store: mutations only adopt
    // new items after they have been written.
    pub fn wishlist(&self) -> RwLockReadGuard<'_, WishlistStore> {
        self.wishlist.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn wishlist_mut(&self) -> RwLockWriteGuard<'_, WishlistStore> {
        self.wishlist.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ids currently saved to the wishlist
    pub fn saved_ids(&self) -> HashSet<i64> {
        self.wishlist().items().iter().map(|item| item.id()).collect()
    }
}

/// Creates the application state with all services initialized
pub fn create_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let tmdb = TmdbClient::from_config(config);
    if tmdb.is_configured() {
        tracing::info!("TMDB API key loaded");
    } else {
        tracing::warn!("TMDB_API_KEY is not configured, serving fallback catalog data");
    }

    let storage = FileStorage::new(&config.data_dir)?;
    let wishlist = WishlistStore::load(Box::new(storage))?;
    tracing::info!(count = wishlist.len(), "Wishlist loaded from {}", config.data_dir);

    Ok(Arc::new(AppState::new(CatalogService::new(tmdb), wishlist)))
}

/// Creates the router with all routes configured
pub fn create_router(state: Arc<AppState>, static_dir: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Serve static frontend files if directory is configured
    if let Some(dir) = static_dir {
        let index_path = format!("{}/index.html", dir);
        if std::path::Path::new(&index_path).exists() {
            tracing::info!("Serving static files from: {}", dir);
            // Serve static files, with fallback to index.html for SPA routing
            router = router.fallback_service(
                ServeDir::new(dir).not_found_service(ServeFile::new(&index_path)),
            );
        } else {
            tracing::warn!(
                "Static directory configured but index.html not found: {}",
                dir
            );
        }
    }

    router
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(status))
        // Pages
        .route("/home", get(browse::home))
        // Movies
        .route("/movies", get(browse::movies_page))
        .route("/movies/lists/{listing}", get(movies::list))
        .route("/movies/genres/{genre_id}", get(movies::by_genre))
        .route("/movies/{id}", get(movies::get))
        // TV
        .route("/tv", get(browse::tv_page))
        .route("/tv/lists/{listing}", get(tv::list))
        .route("/tv/genres/{genre_id}", get(tv::by_genre))
        .route("/tv/{id}", get(tv::get))
        // Search
        .route("/search", get(search::search))
        // My list
        .route("/mylist", get(mylist::list).post(mylist::add))
        .route("/mylist/{id}", get(mylist::contains).delete(mylist::remove))
}

async fn health_check() -> &'static str {
    "OK"
}

async fn status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "tmdb_configured": state.catalog.is_configured(),
        "wishlist_count": state.saved_ids().len(),
    }))
}

/// Starts the server and blocks until shutdown
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Cinefront server...");

    let state = create_app_state(&config)?;

    // Build router with optional static file serving
    let app = create_router(state, config.static_dir.as_deref());

    let addr = config.server_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
