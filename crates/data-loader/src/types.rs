//! Core domain types for the movie catalog.
//!
//! This module defines the typed record every other crate reads:
//! - `MovieRecord` with explicit `Option` fields for nullable columns
//! - `GenreNames`, the ordered genre-name sequence with a membership check
//! - `Dataset`, the immutable, ordered collection built once at startup

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDB movie identifier
pub type MovieId = i64;

/// TMDB integer genre code (e.g. 28 = Action)
pub type GenreCode = i64;

// =============================================================================
// Genre Names
// =============================================================================

/// Ordered genre names of a single record, in the order the source lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreNames(Vec<String>);

impl GenreNames {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, genre: &str) -> bool {
        self.0.iter().any(|name| name == genre)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for GenreNames {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl FromIterator<String> for GenreNames {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Movie Record
// =============================================================================

/// One row of the catalog with its raw and derived fields.
///
/// Text fields are never null: missing or placeholder values ("nan", "null",
/// "none") are stored as the empty string. Numeric fields keep `None` for
/// anything unparsable, and `None` is only turned into 0 when a response is
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: Option<MovieId>,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub original_language: String,
    /// Release date exactly as the source wrote it (normalized text)
    pub release_date: String,

    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,

    /// Derived from `release_date`; `None` when the date does not parse
    pub release_year: Option<i32>,
    /// Derived from `release_date`; `None` exactly when `release_year` is
    pub release_month: Option<u32>,

    pub genre_codes: Vec<GenreCode>,
    pub genre_names: GenreNames,

    pub poster_path: String,
    pub backdrop_path: String,
}

// =============================================================================
// Dataset - The Immutable In-Memory Catalog
// =============================================================================

/// The full catalog, in source row order.
///
/// A `Dataset` is built once and only ever handed out by shared reference
/// (usually behind an `Arc`). Queries sort their own views of it; nothing
/// reorders or edits the records after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MovieRecord>,
}

impl Dataset {
    /// Wrap already-coerced records, keeping their order.
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<MovieRecord>> for Dataset {
    fn from(records: Vec<MovieRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
