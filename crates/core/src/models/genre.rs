//! Genre identifiers used by the upstream catalog.

pub mod movie_genres {
    pub const ACTION: i32 = 28;
    pub const ADVENTURE: i32 = 12;
    pub const ANIMATION: i32 = 16;
    pub const COMEDY: i32 = 35;
    pub const CRIME: i32 = 80;
    pub const DOCUMENTARY: i32 = 99;
    pub const DRAMA: i32 = 18;
    pub const FAMILY: i32 = 10751;
    pub const FANTASY: i32 = 14;
    pub const HISTORY: i32 = 36;
    pub const HORROR: i32 = 27;
    pub const MUSIC: i32 = 10402;
    pub const MYSTERY: i32 = 9648;
    pub const ROMANCE: i32 = 10749;
    pub const SCIENCE_FICTION: i32 = 878;
    pub const TV_MOVIE: i32 = 10770;
    pub const THRILLER: i32 = 53;
    pub const WAR: i32 = 10752;
    pub const WESTERN: i32 = 37;

    pub const ALL: &[i32] = &[
        ACTION,
        ADVENTURE,
        ANIMATION,
        COMEDY,
        CRIME,
        DOCUMENTARY,
        DRAMA,
        FAMILY,
        FANTASY,
        HISTORY,
        HORROR,
        MUSIC,
        MYSTERY,
        ROMANCE,
        SCIENCE_FICTION,
        TV_MOVIE,
        THRILLER,
        WAR,
        WESTERN,
    ];
}

pub mod tv_genres {
    pub const ACTION_ADVENTURE: i32 = 10759;
    pub const ANIMATION: i32 = 16;
    pub const COMEDY: i32 = 35;
    pub const CRIME: i32 = 80;
    pub const DOCUMENTARY: i32 = 99;
    pub const DRAMA: i32 = 18;
    pub const FAMILY: i32 = 10751;
    pub const KIDS: i32 = 10762;
    pub const MYSTERY: i32 = 9648;
    pub const NEWS: i32 = 10763;
    pub const REALITY: i32 = 10764;
    pub const SCI_FI_FANTASY: i32 = 10765;
    pub const SOAP: i32 = 10766;
    pub const TALK: i32 = 10767;
    pub const WAR_POLITICS: i32 = 10768;
    pub const WESTERN: i32 = 37;

    pub const ALL: &[i32] = &[
        ACTION_ADVENTURE,
        ANIMATION,
        COMEDY,
        CRIME,
        DOCUMENTARY,
        DRAMA,
        FAMILY,
        KIDS,
        MYSTERY,
        NEWS,
        REALITY,
        SCI_FI_FANTASY,
        SOAP,
        TALK,
        WAR_POLITICS,
        WESTERN,
    ];
}

/// Name used for genre ids missing from the lookup table
pub const DEFAULT_GENRE_NAME: &str = "Action";

pub fn is_known_movie_genre(id: i32) -> bool {
    movie_genres::ALL.contains(&id)
}

pub fn is_known_tv_genre(id: i32) -> bool {
    tv_genres::ALL.contains(&id)
}

/// Display name for the genres the fallback pool uses
pub fn genre_name(id: i32) -> &'static str {
    match id {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        18 => "Drama",
        10749 => "Romance",
        14 => "Fantasy",
        27 => "Horror",
        878 => "Science Fiction",
        53 => "Thriller",
        10759 => "Action & Adventure",
        10765 => "Sci-Fi & Fantasy",
        _ => DEFAULT_GENRE_NAME,
    }
}

/// Display label for any known film or series genre id
pub fn genre_label(id: i32) -> Option<&'static str> {
    let label = match id {
        28 => "Action",
        12 => "Adventure",
        16 => "Animation",
        35 => "Comedy",
        80 => "Crime",
        99 => "Documentary",
        18 => "Drama",
        10751 => "Family",
        14 => "Fantasy",
        36 => "History",
        27 => "Horror",
        10402 => "Music",
        9648 => "Mystery",
        10749 => "Romance",
        878 => "Science Fiction",
        10770 => "TV Movie",
        53 => "Thriller",
        10752 => "War",
        37 => "Western",
        10759 => "Action & Adventure",
        10762 => "Kids",
        10763 => "News",
        10764 => "Reality",
        10765 => "Sci-Fi & Fantasy",
        10766 => "Soap",
        10767 => "Talk",
        10768 => "War & Politics",
        _ => return None,
    };
    Some(label)
}
