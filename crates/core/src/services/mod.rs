pub mod catalog;
pub mod fallback;
pub mod tmdb;
pub mod wishlist;

pub use catalog::{CatalogService, MovieListing, TvListing};
pub use tmdb::{ImageSize, TmdbClient, image_url};
pub use wishlist::WishlistStore;
