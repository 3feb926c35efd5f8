use serde::{Deserialize, Deserializer, Serialize};

/// Exclusive upper bound of the identifiers the fallback pool hands out
/// (base ids 1-10 and their copies at 101-110)
pub const SYNTHETIC_ID_CEILING: i64 = 111;

pub const MAX_RATING: f64 = 10.0;

/// The two resource families of the upstream catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub release_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub vote_count: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub genre_ids: Vec<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub popularity: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub adult: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub video: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub original_language: String,
    #[serde(default, deserialize_with = "nullable")]
    pub original_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub first_air_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_air_date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub vote_count: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub genre_ids: Vec<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub popularity: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub original_language: String,
    #[serde(default, deserialize_with = "nullable")]
    pub original_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_seasons: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_episodes: Option<i32>,
}

/// A film or a series, tagged with its kind on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum CatalogItem {
    Movie(Film),
    Tv(Series),
}

impl CatalogItem {
    pub fn id(&self) -> i64 {
        match self {
            CatalogItem::Movie(film) => film.id,
            CatalogItem::Tv(series) => series.id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            CatalogItem::Movie(_) => MediaKind::Movie,
            CatalogItem::Tv(_) => MediaKind::Tv,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CatalogItem::Movie(film) => &film.title,
            CatalogItem::Tv(series) => &series.name,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            CatalogItem::Movie(film) => film.poster_path.as_deref(),
            CatalogItem::Tv(series) => series.poster_path.as_deref(),
        }
    }

    pub fn backdrop_path(&self) -> Option<&str> {
        match self {
            CatalogItem::Movie(film) => film.backdrop_path.as_deref(),
            CatalogItem::Tv(series) => series.backdrop_path.as_deref(),
        }
    }

    pub fn vote_average(&self) -> f64 {
        match self {
            CatalogItem::Movie(film) => film.vote_average,
            CatalogItem::Tv(series) => series.vote_average,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        is_synthetic_id(self.id())
    }
}

impl From<Film> for CatalogItem {
    fn from(film: Film) -> Self {
        CatalogItem::Movie(film)
    }
}

impl From<Series> for CatalogItem {
    fn from(series: Series) -> Self {
        CatalogItem::Tv(series)
    }
}

/// Field deserializer treating an explicit `null` like a missing key
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifiers in the reserved low range only ever come from the fallback pool
pub fn is_synthetic_id(id: i64) -> bool {
    (0..SYNTHETIC_ID_CEILING).contains(&id)
}

/// Clamps to the display range and truncates to one decimal place
pub fn clamp_rating(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let clamped = value.clamp(0.0, MAX_RATING);
    (clamped * 10.0).round() / 10.0
}

pub fn format_rating(value: f64) -> String {
    format!("{:.1}", clamp_rating(value))
}
