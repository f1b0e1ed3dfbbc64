//! Filter options offered to clients.
//!
//! Lists every value a listing filter can usefully take, derived from the
//! catalog on each call.

use data_loader::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::stats::year_bounds;

/// Year bounds reported when no record has a release year.
pub const DEFAULT_YEAR_RANGE: [i32; 2] = [1990, 2026];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Every genre name in the catalog, sorted
    pub genres: Vec<String>,
    /// Every non-empty original language, sorted
    pub languages: Vec<String>,
    pub year_min: i32,
    pub year_max: i32,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let genres: BTreeSet<&str> = dataset
            .iter()
            .flat_map(|record| record.genre_names.iter())
            .collect();

        let languages: BTreeSet<&str> = dataset
            .iter()
            .map(|record| record.original_language.as_str())
            .filter(|language| !language.is_empty())
            .collect();

        let [year_min, year_max] = year_bounds(dataset).unwrap_or(DEFAULT_YEAR_RANGE);

        Self {
            genres: genres.into_iter().map(str::to_string).collect(),
            languages: languages.into_iter().map(str::to_string).collect(),
            year_min,
            year_max,
        }
    }
}
