//! Response bodies for the listing endpoint.
//!
//! Missing numeric measures become 0 here and nowhere earlier, so filtering
//! and sorting still see them as missing.

use data_loader::{GenreCode, GenreNames, MovieId, MovieRecord};
use query::MoviePage;
use serde::Serialize;

use crate::images::{BACKDROP_BASE_URL, POSTER_BASE_URL, image_url};

/// One movie as returned by `GET /movies`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieView {
    pub id: Option<MovieId>,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub release_date: String,
    pub release_year: Option<i32>,
    pub release_month: Option<u32>,
    pub original_language: String,
    pub genre_ids: Vec<GenreCode>,
    pub genre_names: GenreNames,
    pub poster_path: String,
    pub backdrop_path: String,
    pub poster_url: String,
    pub backdrop_url: String,
}

impl From<&MovieRecord> for MovieView {
    fn from(record: &MovieRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            original_title: record.original_title.clone(),
            overview: record.overview.clone(),
            popularity: record.popularity.unwrap_or(0.0),
            vote_average: record.vote_average.unwrap_or(0.0),
            vote_count: record.vote_count.unwrap_or(0),
            release_date: record.release_date.clone(),
            release_year: record.release_year,
            release_month: record.release_month,
            original_language: record.original_language.clone(),
            genre_ids: record.genre_codes.clone(),
            genre_names: record.genre_names.clone(),
            poster_path: record.poster_path.clone(),
            backdrop_path: record.backdrop_path.clone(),
            poster_url: image_url(&record.poster_path, POSTER_BASE_URL),
            backdrop_url: image_url(&record.backdrop_path, BACKDROP_BASE_URL),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieListResponse {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub movies: Vec<MovieView>,
}

impl From<MoviePage<'_>> for MovieListResponse {
    fn from(page: MoviePage<'_>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            movies: page.movies.into_iter().map(MovieView::from).collect(),
        }
    }
}
