pub mod catalog;
pub mod detail;
pub mod genre;
pub mod page;

pub use catalog::*;
pub use detail::*;
pub use genre::{genre_label, genre_name, movie_genres, tv_genres};
pub use page::*;
