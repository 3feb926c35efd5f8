pub mod browse;
pub mod movies;
pub mod mylist;
pub mod search;
pub mod tv;
pub mod views;
