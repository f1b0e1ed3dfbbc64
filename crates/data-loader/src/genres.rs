//! Static genre code lookup.
//!
//! The source encodes genres as TMDB integer codes. This module maps them
//! to the display names the catalog exposes and filters on.

use crate::types::GenreCode;

/// Display name for a known genre code.
///
/// Returns `None` for codes outside the TMDB movie genre list.
pub fn genre_name(code: GenreCode) -> Option<&'static str> {
    let name = match code {
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
        878 => "Sci-Fi",
        10770 => "TV Movie",
        53 => "Thriller",
        10752 => "War",
        37 => "Western",
        _ => return None,
    };
    Some(name)
}

/// Display name for any genre code.
///
/// Unknown codes are kept as their decimal text rather than dropped, so a
/// record never loses a genre it carries.
pub fn display_name(code: GenreCode) -> String {
    genre_name(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}
