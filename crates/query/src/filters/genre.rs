//! Filter on genre membership.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records carrying the given genre name (exact match).
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        record.genre_names.contains(&self.genre)
    }
}
