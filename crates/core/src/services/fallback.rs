//! Offline catalog data.
//!
//! Everything here is pure: the same identifier always produces the same
//! record, so pages stay populated and stable while the upstream API is
//! unreachable or unconfigured.

use chrono::{Datelike, NaiveDate};

use crate::models::{
    Film, FilmDetail, Genre, Season, Series, SeriesDetail, SpokenLanguage,
    clamp_rating, genre_name, movie_genres, tv_genres,
};

/// Maximum length of any list the catalog returns
pub const MAX_LIST_LEN: usize = 20;

/// Added to pool ids to form the second copy of each fallback entry
pub const FALLBACK_ID_OFFSET: i64 = 100;

struct FilmSeed {
    id: i64,
    title: &'static str,
    overview: &'static str,
    poster_path: &'static str,
    backdrop_path: Option<&'static str>,
    release_date: &'static str,
    vote_average: f64,
    vote_count: i64,
    genre_ids: &'static [i32],
    popularity: f64,
    original_language: &'static str,
    original_title: &'static str,
}

struct SeriesSeed {
    id: i64,
    name: &'static str,
    overview: &'static str,
    poster_path: &'static str,
    backdrop_path: Option<&'static str>,
    first_air_date: &'static str,
    vote_average: f64,
    vote_count: i64,
    genre_ids: &'static [i32],
    popularity: f64,
    original_language: &'static str,
    original_name: &'static str,
}

const FILM_POOL: &[FilmSeed] = &[
    FilmSeed {
        id: 1,
        title: "The Matrix",
        overview: "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
        poster_path: "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
        backdrop_path: Some("/fNG7i7RqMErkcqhohV2a6cV1Ehy.jpg"),
        release_date: "1999-03-30",
        vote_average: 8.7,
        vote_count: 24567,
        genre_ids: &[movie_genres::ACTION, movie_genres::SCIENCE_FICTION],
        popularity: 100.0,
        original_language: "en",
        original_title: "The Matrix",
    },
    FilmSeed {
        id: 2,
        title: "Inception",
        overview: "Cobb, a skilled thief who commits corporate espionage by infiltrating the subconscious of his targets, is offered a chance to regain his old life as payment for a task considered to be impossible.",
        poster_path: "/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg",
        backdrop_path: Some("/8ZTVqvKDQ8emSGUEMjsS4yHAwrp.jpg"),
        release_date: "2010-07-15",
        vote_average: 8.4,
        vote_count: 35120,
        genre_ids: &[movie_genres::ACTION, movie_genres::SCIENCE_FICTION, movie_genres::ADVENTURE],
        popularity: 96.0,
        original_language: "en",
        original_title: "Inception",
    },
    FilmSeed {
        id: 3,
        title: "The Dark Knight",
        overview: "Batman raises the stakes in his war on crime. With the help of Lt. Jim Gordon and District Attorney Harvey Dent, Batman sets out to dismantle the remaining criminal organizations that plague the streets.",
        poster_path: "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
        backdrop_path: Some("/nMKdUUepR0i5zn0y1T4CsSB5chy.jpg"),
        release_date: "2008-07-16",
        vote_average: 8.5,
        vote_count: 31890,
        genre_ids: &[movie_genres::DRAMA, movie_genres::ACTION, movie_genres::CRIME, movie_genres::THRILLER],
        popularity: 92.0,
        original_language: "en",
        original_title: "The Dark Knight",
    },
    FilmSeed {
        id: 4,
        title: "Interstellar",
        overview: "The adventures of a group of explorers who make use of a newly discovered wormhole to surpass the limitations on human space travel and conquer the vast distances involved in an interstellar voyage.",
        poster_path: "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
        backdrop_path: Some("/xJHokMbljvjADYdit5fK5VQsXEG.jpg"),
        release_date: "2014-11-05",
        vote_average: 8.4,
        vote_count: 34210,
        genre_ids: &[movie_genres::ADVENTURE, movie_genres::DRAMA, movie_genres::SCIENCE_FICTION],
        popularity: 90.0,
        original_language: "en",
        original_title: "Interstellar",
    },
    FilmSeed {
        id: 5,
        title: "Pulp Fiction",
        overview: "A burger-loving hit man, his philosophical partner, a drug-addled gangster's moll and a washed-up boxer converge in this sprawling, comedic crime caper.",
        poster_path: "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
        backdrop_path: Some("/suaEOtk1N1sgg2MTM7oZd2cfVp3.jpg"),
        release_date: "1994-09-10",
        vote_average: 8.5,
        vote_count: 27345,
        genre_ids: &[movie_genres::THRILLER, movie_genres::CRIME],
        popularity: 85.0,
        original_language: "en",
        original_title: "Pulp Fiction",
    },
    FilmSeed {
        id: 6,
        title: "Parasite",
        overview: "All unemployed, Ki-taek's family takes peculiar interest in the wealthy and glamorous Parks for their livelihood until they get entangled in an unexpected incident.",
        poster_path: "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
        backdrop_path: Some("/TU9NIjwzjoKPwQHoHshkFcQUCG.jpg"),
        release_date: "2019-05-30",
        vote_average: 8.5,
        vote_count: 17650,
        genre_ids: &[movie_genres::COMEDY, movie_genres::THRILLER, movie_genres::DRAMA],
        popularity: 80.0,
        original_language: "ko",
        original_title: "기생충",
    },
    FilmSeed {
        id: 7,
        title: "Spirited Away",
        overview: "A young girl, Chihiro, becomes trapped in a strange new world of spirits. When her parents undergo a mysterious transformation, she must call upon the courage she never knew she had to free her family.",
        poster_path: "/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg",
        backdrop_path: Some("/Ab8mkHmkYADjU7wQiOkia9BzGvS.jpg"),
        release_date: "2001-07-20",
        vote_average: 8.5,
        vote_count: 15980,
        genre_ids: &[movie_genres::ANIMATION, movie_genres::FAMILY, movie_genres::FANTASY],
        popularity: 78.0,
        original_language: "ja",
        original_title: "千と千尋の神隠し",
    },
    FilmSeed {
        id: 8,
        title: "The Shawshank Redemption",
        overview: "Imprisoned in the 1940s for the double murder of his wife and her lover, upstanding banker Andy Dufresne begins a new life at the Shawshank prison, where he puts his accounting skills to work for an amoral warden.",
        poster_path: "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
        backdrop_path: Some("/kXfqcdQKsToO0OUXHcrrNCHDBzO.jpg"),
        release_date: "1994-09-23",
        vote_average: 8.7,
        vote_count: 26480,
        genre_ids: &[movie_genres::DRAMA, movie_genres::CRIME],
        popularity: 76.0,
        original_language: "en",
        original_title: "The Shawshank Redemption",
    },
    FilmSeed {
        id: 9,
        title: "La La Land",
        overview: "Mia, an aspiring actress, serves lattes to movie stars in between auditions and Sebastian, a jazz musician, scrapes by playing cocktail party gigs in dingy bars, but as success mounts they are faced with decisions that begin to fray the fragile fabric of their love affair.",
        poster_path: "/uDO8zWDhfWwoFdKS4fzkUJt0Rf0.jpg",
        backdrop_path: None,
        release_date: "2016-11-29",
        vote_average: 7.9,
        vote_count: 16720,
        genre_ids: &[movie_genres::COMEDY, movie_genres::DRAMA, movie_genres::ROMANCE],
        popularity: 70.0,
        original_language: "en",
        original_title: "La La Land",
    },
    FilmSeed {
        id: 10,
        title: "Get Out",
        overview: "Chris and his girlfriend Rose go upstate to visit her parents for the weekend. At first, Chris reads the family's overly accommodating behavior as nervous attempts to deal with their daughter's interracial relationship, but as the weekend progresses a series of increasingly disturbing discoveries lead him to a truth that he never could have imagined.",
        poster_path: "/tFXcEccSQMf3lfhfXKSU9iRBpa3.jpg",
        backdrop_path: None,
        release_date: "2017-02-24",
        vote_average: 7.6,
        vote_count: 16310,
        genre_ids: &[movie_genres::MYSTERY, movie_genres::THRILLER, movie_genres::HORROR],
        popularity: 65.0,
        original_language: "en",
        original_title: "Get Out",
    },
];

const SERIES_POOL: &[SeriesSeed] = &[
    SeriesSeed {
        id: 1,
        name: "Stranger Things",
        overview: "When a young boy vanishes, a small town uncovers a mystery involving secret experiments, terrifying supernatural forces and one strange little girl.",
        poster_path: "/49WJfeN0moxb9IPfGn8AIqMGskD.jpg",
        backdrop_path: Some("/56v2KjBlU4XaOv9rVYEQypROD7P.jpg"),
        first_air_date: "2016-07-15",
        vote_average: 8.6,
        vote_count: 12345,
        genre_ids: &[tv_genres::SCI_FI_FANTASY, tv_genres::DRAMA],
        popularity: 95.0,
        original_language: "en",
        original_name: "Stranger Things",
    },
    SeriesSeed {
        id: 2,
        name: "Breaking Bad",
        overview: "Walter White, a New Mexico chemistry teacher, is diagnosed with Stage III cancer and given a prognosis of only two years left to live. He enters the dangerous world of drugs and crime to secure his family's financial future at any cost.",
        poster_path: "/ggFHVNu6YYI5L9pCfOacjizRGt.jpg",
        backdrop_path: Some("/tsRy63Mu5cu8etL1X7ZLyf7UP1M.jpg"),
        first_air_date: "2008-01-20",
        vote_average: 8.9,
        vote_count: 14210,
        genre_ids: &[tv_genres::DRAMA, tv_genres::CRIME],
        popularity: 93.0,
        original_language: "en",
        original_name: "Breaking Bad",
    },
    SeriesSeed {
        id: 3,
        name: "Game of Thrones",
        overview: "Seven noble families fight for control of the mythical land of Westeros. Friction between the houses leads to full-scale war, all while a very ancient evil awakens in the farthest north.",
        poster_path: "/1XS1oqL89opfnbLl8WnZY1O1uJx.jpg",
        backdrop_path: Some("/2OMB0ynKlyIenMJWI2Dy9IWT4c.jpg"),
        first_air_date: "2011-04-17",
        vote_average: 8.5,
        vote_count: 23120,
        genre_ids: &[tv_genres::SCI_FI_FANTASY, tv_genres::DRAMA, tv_genres::ACTION_ADVENTURE],
        popularity: 91.0,
        original_language: "en",
        original_name: "Game of Thrones",
    },
    SeriesSeed {
        id: 4,
        name: "The Office",
        overview: "The everyday lives of office employees in the Scranton, Pennsylvania branch of the fictional Dunder Mifflin Paper Company.",
        poster_path: "/7DJKHzAi83BmQrWLrYYOqcoKfhR.jpg",
        backdrop_path: None,
        first_air_date: "2005-03-24",
        vote_average: 8.6,
        vote_count: 4320,
        genre_ids: &[tv_genres::COMEDY],
        popularity: 88.0,
        original_language: "en",
        original_name: "The Office",
    },
    SeriesSeed {
        id: 5,
        name: "The Mandalorian",
        overview: "After the fall of the Galactic Empire, lawlessness has spread throughout the galaxy. A lone gunfighter makes his way through the outer reaches, earning his keep as a bounty hunter.",
        poster_path: "/sWgBv7LV2PRoQgkxwlibdGXKz1S.jpg",
        backdrop_path: Some("/9ijMGlJKqcslswWUzTEwScm82Gs.jpg"),
        first_air_date: "2019-11-12",
        vote_average: 8.4,
        vote_count: 10050,
        genre_ids: &[tv_genres::SCI_FI_FANTASY, tv_genres::ACTION_ADVENTURE, tv_genres::DRAMA],
        popularity: 84.0,
        original_language: "en",
        original_name: "The Mandalorian",
    },
    SeriesSeed {
        id: 6,
        name: "Chernobyl",
        overview: "The true story of one of the worst man-made catastrophes in history and of the brave men and women who sacrificed to save Europe from unimaginable disaster.",
        poster_path: "/hlLXt2tOPT6RRnjiUmoxyG1LTFi.jpg",
        backdrop_path: None,
        first_air_date: "2019-05-06",
        vote_average: 8.7,
        vote_count: 5470,
        genre_ids: &[tv_genres::DRAMA],
        popularity: 72.0,
        original_language: "en",
        original_name: "Chernobyl",
    },
    SeriesSeed {
        id: 7,
        name: "Sherlock",
        overview: "A modern update finds the famous sleuth and his doctor partner solving crime in 21st century London.",
        poster_path: "/7WTsnHkbA0FaG6R9twfFde0I9hl.jpg",
        backdrop_path: None,
        first_air_date: "2010-07-25",
        vote_average: 8.5,
        vote_count: 5120,
        genre_ids: &[tv_genres::CRIME, tv_genres::DRAMA, tv_genres::MYSTERY],
        popularity: 70.0,
        original_language: "en",
        original_name: "Sherlock",
    },
    SeriesSeed {
        id: 8,
        name: "Dark",
        overview: "A missing child causes four families to help each other for answers. What they could not imagine is that this mystery would be connected to innovations from three generations.",
        poster_path: "/apbrbWs8M9lyOpJYU5WXrpFbk1Z.jpg",
        backdrop_path: None,
        first_air_date: "2017-12-01",
        vote_average: 8.4,
        vote_count: 6230,
        genre_ids: &[tv_genres::CRIME, tv_genres::DRAMA, tv_genres::SCI_FI_FANTASY, tv_genres::MYSTERY],
        popularity: 66.0,
        original_language: "de",
        original_name: "Dark",
    },
    SeriesSeed {
        id: 9,
        name: "Arcane",
        overview: "Amid the stark discord of twin cities Piltover and Zaun, two sisters fight on rival sides of a war between magic technologies and clashing convictions.",
        poster_path: "/fqldf2t8ztc9aiwn3k6mlX3tvRT.jpg",
        backdrop_path: None,
        first_air_date: "2021-11-06",
        vote_average: 8.7,
        vote_count: 4410,
        genre_ids: &[tv_genres::ANIMATION, tv_genres::SCI_FI_FANTASY, tv_genres::ACTION_ADVENTURE],
        popularity: 64.0,
        original_language: "en",
        original_name: "Arcane",
    },
    SeriesSeed {
        id: 10,
        name: "Friends",
        overview: "Six young people from New York City, on their own and struggling to survive in the real world, find the companionship, comfort and support they get from each other to be the perfect antidote to the pressures of life.",
        poster_path: "/f496cm9enuEsZkSPzCwnTESEK5s.jpg",
        backdrop_path: None,
        first_air_date: "1994-09-22",
        vote_average: 8.4,
        vote_count: 7150,
        genre_ids: &[tv_genres::COMEDY, tv_genres::DRAMA],
        popularity: 60.0,
        original_language: "en",
        original_name: "Friends",
    },
];

impl FilmSeed {
    fn to_film(&self) -> Film {
        Film {
            id: self.id,
            title: self.title.to_string(),
            overview: self.overview.to_string(),
            poster_path: Some(self.poster_path.to_string()),
            backdrop_path: self.backdrop_path.map(str::to_string),
            release_date: self.release_date.to_string(),
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            genre_ids: self.genre_ids.to_vec(),
            popularity: self.popularity,
            adult: false,
            video: false,
            original_language: self.original_language.to_string(),
            original_title: self.original_title.to_string(),
        }
    }
}

impl SeriesSeed {
    fn to_series(&self) -> Series {
        Series {
            id: self.id,
            name: self.name.to_string(),
            overview: self.overview.to_string(),
            poster_path: Some(self.poster_path.to_string()),
            backdrop_path: self.backdrop_path.map(str::to_string),
            first_air_date: self.first_air_date.to_string(),
            last_air_date: None,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            genre_ids: self.genre_ids.to_vec(),
            popularity: self.popularity,
            original_language: self.original_language.to_string(),
            original_name: self.original_name.to_string(),
            number_of_seasons: None,
            number_of_episodes: None,
        }
    }
}

/// The hand-authored films, one entry each
pub fn curated_films() -> Vec<Film> {
    FILM_POOL.iter().map(FilmSeed::to_film).collect()
}

/// The hand-authored series, one entry each
pub fn curated_series() -> Vec<Series> {
    SERIES_POOL.iter().map(SeriesSeed::to_series).collect()
}

/// Fallback film listing: the pool followed by its offset copies, at most 20 items
pub fn fallback_movies() -> Vec<Film> {
    let pool = curated_films();
    let copies = pool.iter().cloned().map(|mut film| {
        film.id += FALLBACK_ID_OFFSET;
        film
    });
    let movies: Vec<Film> = pool
        .iter()
        .cloned()
        .chain(copies)
        .take(MAX_LIST_LEN)
        .collect();

    tracing::debug!(count = movies.len(), "Generated fallback movies");
    movies
}

/// Fallback series listing: the pool followed by its offset copies, at most 20 items
pub fn fallback_tv_shows() -> Vec<Series> {
    let pool = curated_series();
    let copies = pool.iter().cloned().map(|mut show| {
        show.id += FALLBACK_ID_OFFSET;
        show
    });
    let shows: Vec<Series> = pool
        .iter()
        .cloned()
        .chain(copies)
        .take(MAX_LIST_LEN)
        .collect();

    tracing::debug!(count = shows.len(), "Generated fallback TV shows");
    shows
}

/// Case-insensitive substring match over the curated films' titles and synopses
pub fn search_fallback_movies(query: &str) -> Vec<Film> {
    let needle = query.trim().to_lowercase();
    curated_films()
        .into_iter()
        .filter(|film| {
            film.title.to_lowercase().contains(&needle)
                || film.overview.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Case-insensitive substring match over the curated series' names and synopses
pub fn search_fallback_tv_shows(query: &str) -> Vec<Series> {
    let needle = query.trim().to_lowercase();
    curated_series()
        .into_iter()
        .filter(|show| {
            show.name.to_lowercase().contains(&needle)
                || show.overview.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Integer value of a leading `[+-]digits` prefix, or 1 when there is none
pub fn numeric_seed(id: &str) -> i64 {
    let trimmed = id.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();

    rest[..digits_len]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(1)
}

/// Index into a pool of `len` entries chosen by the sum of the id's character codes
pub fn pool_index(id: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let sum: u64 = id.chars().map(|c| c as u64).sum();
    (sum % len as u64) as usize
}

/// Seed-derived calendar date: month is `seed mod 12 + 1`, day is `seed mod 28 + 1`
pub fn synthetic_date(year: i32, seed: i64) -> Option<NaiveDate> {
    let month = seed.rem_euclid(12) as u32 + 1;
    let day = seed.rem_euclid(28) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn genres_for(ids: &[i32]) -> Vec<Genre> {
    ids.iter()
        .map(|&id| Genre {
            id,
            name: genre_name(id).to_string(),
        })
        .collect()
}

/// Deterministic stand-in for a film detail lookup.
///
/// Returns `None` only for a blank identifier.
pub fn fallback_movie_details(movie_id: &str) -> Option<FilmDetail> {
    if movie_id.trim().is_empty() {
        return None;
    }

    let base = FILM_POOL.get(pool_index(movie_id, FILM_POOL.len()))?.to_film();
    let seed = numeric_seed(movie_id);

    let year = 1990 + seed.rem_euclid(30) as i32;
    let runtime = 90 + seed.rem_euclid(60) as i32;
    let rating = clamp_rating(6.0 + seed.rem_euclid(4) as f64);
    let release_date = synthetic_date(year, seed)?;

    let genres = genres_for(&base.genre_ids);
    let film = Film {
        id: seed,
        title: format!("{} ({})", base.title, year),
        overview: format!("A special edition of {}. {}", base.title, base.overview),
        release_date: format_date(release_date),
        vote_average: rating,
        vote_count: 1000 + seed.rem_euclid(10_000),
        ..base
    };

    let detail = FilmDetail {
        film,
        runtime: Some(runtime),
        genres,
        production_companies: Vec::new(),
        production_countries: Vec::new(),
        spoken_languages: vec![SpokenLanguage {
            english_name: "English".to_string(),
            iso_639_1: "en".to_string(),
            name: "English".to_string(),
        }],
        status: "Released".to_string(),
        tagline: format!("A unique cinematic experience - ID: {}", movie_id),
        budget: 50_000_000 + seed.rem_euclid(10) * 25_000_000,
        revenue: 200_000_000 + seed.rem_euclid(20) * 50_000_000,
        homepage: String::new(),
        imdb_id: Some(format!("tt{}", 1_000_000 + seed.rem_euclid(10_000))),
    };

    tracing::debug!(movie_id, title = %detail.film.title, "Generated fallback movie details");
    Some(detail)
}

/// Deterministic stand-in for a series detail lookup.
///
/// Returns `None` only for a blank identifier.
pub fn fallback_tv_details(tv_id: &str) -> Option<SeriesDetail> {
    if tv_id.trim().is_empty() {
        return None;
    }

    let base = SERIES_POOL.get(pool_index(tv_id, SERIES_POOL.len()))?.to_series();
    let seed = numeric_seed(tv_id);

    let year = 2000 + seed.rem_euclid(20) as i32;
    let rating = clamp_rating(7.0 + seed.rem_euclid(3) as f64);
    let season_count = 1 + seed.rem_euclid(6) as i32;
    let episodes_per_season = 8 + seed.rem_euclid(7) as i32;
    let name = format!("{} ({})", base.name, year);

    let first_air_date = synthetic_date(year, seed)?;
    let last_air_date = first_air_date.with_year(first_air_date.year() + season_count - 1)?;

    let seasons: Vec<Season> = (1..=season_count)
        .map(|number| Season {
            id: number as i64,
            name: format!("Season {}", number),
            overview: format!("The {} season of {}", number, name),
            poster_path: base.poster_path.clone(),
            season_number: number,
            air_date: synthetic_date(year + number - 1, seed).map(format_date),
            episode_count: episodes_per_season,
        })
        .collect();
    let total_episodes = seasons.iter().map(|season| season.episode_count).sum();

    let genres = genres_for(&base.genre_ids);
    let series = Series {
        id: seed,
        overview: format!("A special edition of {}. {}", base.name, base.overview),
        name,
        first_air_date: format_date(first_air_date),
        last_air_date: Some(format_date(last_air_date)),
        vote_average: rating,
        vote_count: 1000 + seed.rem_euclid(10_000),
        number_of_seasons: Some(season_count),
        number_of_episodes: Some(total_episodes),
        ..base
    };

    let detail = SeriesDetail {
        series,
        genres,
        created_by: Vec::new(),
        episode_run_time: vec![45 + seed.rem_euclid(15) as i32],
        networks: Vec::new(),
        production_companies: Vec::new(),
        seasons,
        status: if season_count > 3 {
            "Ended".to_string()
        } else {
            "Returning Series".to_string()
        },
        show_type: "Scripted".to_string(),
    };

    tracing::debug!(tv_id, name = %detail.series.name, "Generated fallback TV show details");
    Some(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SYNTHETIC_ID_CEILING, is_synthetic_id};

    #[test]
    fn test_fallback_lists_are_bounded_and_populated() {
        let movies = fallback_movies();
        let shows = fallback_tv_shows();

        assert!(!movies.is_empty() && movies.len() <= MAX_LIST_LEN);
        assert!(!shows.is_empty() && shows.len() <= MAX_LIST_LEN);
        assert_eq!(movies[0].title, "The Matrix");
        assert_eq!(shows[0].name, "Stranger Things");
    }

    #[test]
    fn test_fallback_copies_use_offset_ids() {
        let movies = fallback_movies();
        let pool_len = FILM_POOL.len();

        assert_eq!(movies[pool_len].id, movies[0].id + FALLBACK_ID_OFFSET);
        assert_eq!(movies[pool_len].title, movies[0].title);

        let mut ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), movies.len(), "fallback ids must be unique");
        assert!(movies.iter().all(|m| is_synthetic_id(m.id)));
        assert!(fallback_tv_shows().iter().all(|s| is_synthetic_id(s.id)));
    }

    #[test]
    fn test_synthetic_range_ends_at_highest_fallback_id() {
        let highest = fallback_movies()
            .iter()
            .map(|m| m.id)
            .chain(fallback_tv_shows().iter().map(|s| s.id))
            .max()
            .unwrap();

        assert_eq!(highest + 1, SYNTHETIC_ID_CEILING);
        assert!(!is_synthetic_id(550));
    }

    #[test]
    fn test_numeric_seed_parsing() {
        assert_eq!(numeric_seed("42"), 42);
        assert_eq!(numeric_seed("550"), 550);
        assert_eq!(numeric_seed("abc"), 1);
        assert_eq!(numeric_seed(""), 1);
        assert_eq!(numeric_seed("12abc"), 12);
        assert_eq!(numeric_seed("  7"), 7);
        assert_eq!(numeric_seed("-5"), -5);
        assert_eq!(numeric_seed("99999999999999999999999"), 1);
    }

    #[test]
    fn test_pool_index_sums_character_codes() {
        // '4' (52) + '2' (50) = 102
        assert_eq!(pool_index("42", 10), 2);
        // 'a' (97) + 'b' (98) + 'c' (99) = 294
        assert_eq!(pool_index("abc", 10), 4);
        assert_eq!(pool_index("anything", 0), 0);
    }

    #[test]
    fn test_detail_synthesis_is_deterministic() {
        for id in ["42", "550", "abc", "1399", "-7", "0"] {
            let first = serde_json::to_string(&fallback_movie_details(id)).unwrap();
            let second = serde_json::to_string(&fallback_movie_details(id)).unwrap();
            assert_eq!(first, second);

            let first = serde_json::to_string(&fallback_tv_details(id)).unwrap();
            let second = serde_json::to_string(&fallback_tv_details(id)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_synthetic_dates_are_always_valid() {
        for seed in -500..=5000_i64 {
            let date = synthetic_date(2000, seed).expect("valid date");
            assert!((1..=12).contains(&date.month()));
            assert!((1..=28).contains(&date.day()));
        }
    }

    #[test]
    fn test_movie_details_follow_seed_arithmetic() {
        let detail = fallback_movie_details("42").unwrap();

        assert_eq!(detail.film.id, 42);
        assert_eq!(detail.film.title, "The Dark Knight (2002)");
        assert_eq!(detail.film.release_date, "2002-07-15");
        assert_eq!(detail.film.vote_average, 8.0);
        assert_eq!(detail.film.vote_count, 1042);
        assert_eq!(detail.runtime, Some(132));
        assert_eq!(detail.budget, 100_000_000);
        assert_eq!(detail.revenue, 300_000_000);
        assert_eq!(detail.imdb_id.as_deref(), Some("tt1000042"));
        assert_eq!(detail.status, "Released");
        assert!(detail.film.overview.starts_with("A special edition of The Dark Knight. "));
        assert_eq!(
            detail.genres.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(),
            vec!["Drama", "Action", "Crime", "Thriller"]
        );
    }

    #[test]
    fn test_series_details_follow_seed_arithmetic() {
        let detail = fallback_tv_details("42").unwrap();

        assert_eq!(detail.series.id, 42);
        assert_eq!(detail.series.name, "Game of Thrones (2002)");
        assert!(detail.series.name.ends_with("(2002)"));
        assert_eq!(detail.series.first_air_date, "2002-07-15");
        assert_eq!(detail.series.last_air_date.as_deref(), Some("2002-07-15"));
        assert_eq!(detail.series.vote_average, 7.0);
        assert_eq!(detail.seasons.len(), 1);
        assert_eq!(detail.series.number_of_seasons, Some(1));
        assert_eq!(detail.series.number_of_episodes, Some(8));
        assert_eq!(detail.episode_run_time, vec![57]);
        assert_eq!(detail.status, "Returning Series");
        assert_eq!(detail.show_type, "Scripted");
    }

    #[test]
    fn test_series_seasons_advance_one_year_each() {
        // seed 45: 1 + 45 % 6 = 4 seasons starting 2005-10-18
        let detail = fallback_tv_details("45").unwrap();

        assert_eq!(detail.seasons.len(), 4);
        assert_eq!(detail.status, "Ended");
        assert_eq!(detail.series.first_air_date, "2005-10-18");
        assert_eq!(detail.series.last_air_date.as_deref(), Some("2008-10-18"));

        let air_dates: Vec<_> = detail
            .seasons
            .iter()
            .map(|s| s.air_date.clone().unwrap())
            .collect();
        assert_eq!(
            air_dates,
            vec!["2005-10-18", "2006-10-18", "2007-10-18", "2008-10-18"]
        );
        assert_eq!(detail.seasons[3].name, "Season 4");
        assert_eq!(detail.series.number_of_episodes, Some(4 * (8 + 45 % 7)));
    }

    #[test]
    fn test_non_numeric_ids_collapse_to_seed_one() {
        let detail = fallback_movie_details("abc").unwrap();
        assert_eq!(detail.film.id, 1);
        assert_eq!(detail.film.title, "Pulp Fiction (1991)");
        assert_eq!(detail.film.release_date, "1991-02-02");

        assert_eq!(fallback_tv_details("xyz").unwrap().series.id, 1);
    }

    #[test]
    fn test_different_ids_yield_different_records() {
        let a = fallback_movie_details("42").unwrap();
        let b = fallback_movie_details("43").unwrap();
        assert_ne!(a.film.title, b.film.title);
    }

    #[test]
    fn test_blank_identifier_has_no_fallback() {
        assert!(fallback_movie_details("").is_none());
        assert!(fallback_tv_details("   ").is_none());
    }

    #[test]
    fn test_fallback_search_matches_title_and_overview() {
        let by_title = search_fallback_movies("MATRIX");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "The Matrix");

        let by_overview = search_fallback_tv_shows("westeros");
        assert_eq!(by_overview.len(), 1);
        assert_eq!(by_overview[0].name, "Game of Thrones");

        assert!(search_fallback_movies("zzz-no-such-film").is_empty());
    }
}
