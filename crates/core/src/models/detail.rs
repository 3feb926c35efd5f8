use serde::{Deserialize, Serialize};

use super::catalog::{Film, MediaKind, Series, nullable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    pub logo_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub origin_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCountry {
    #[serde(default, deserialize_with = "nullable")]
    pub iso_3166_1: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default, deserialize_with = "nullable")]
    pub english_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub iso_639_1: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub credit_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub gender: i32,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    pub logo_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub origin_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub overview: String,
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub season_number: i32,
    pub air_date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub episode_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDetail {
    #[serde(flatten)]
    pub film: Film,
    pub runtime: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "nullable")]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default, deserialize_with = "nullable")]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default, deserialize_with = "nullable")]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tagline: String,
    #[serde(default, deserialize_with = "nullable")]
    pub budget: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub revenue: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub homepage: String,
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDetail {
    #[serde(flatten)]
    pub series: Series,
    #[serde(default, deserialize_with = "nullable")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_by: Vec<Creator>,
    #[serde(default, deserialize_with = "nullable")]
    pub episode_run_time: Vec<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub networks: Vec<Network>,
    #[serde(default, deserialize_with = "nullable")]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default, deserialize_with = "nullable")]
    pub seasons: Vec<Season>,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, rename = "type", deserialize_with = "nullable")]
    pub show_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum CatalogItemDetail {
    Movie(FilmDetail),
    Tv(SeriesDetail),
}

impl CatalogItemDetail {
    pub fn id(&self) -> i64 {
        match self {
            CatalogItemDetail::Movie(detail) => detail.film.id,
            CatalogItemDetail::Tv(detail) => detail.series.id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            CatalogItemDetail::Movie(_) => MediaKind::Movie,
            CatalogItemDetail::Tv(_) => MediaKind::Tv,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CatalogItemDetail::Movie(detail) => &detail.film.title,
            CatalogItemDetail::Tv(detail) => &detail.series.name,
        }
    }
}
