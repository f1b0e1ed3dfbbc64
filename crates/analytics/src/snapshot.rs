//! The analytics bundle served to dashboards.

use std::time::Instant;

use data_loader::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distribution::{
    GenreCount, LanguageCount, YearCount, genre_counts, genre_distribution, language_counts,
    language_distribution, movies_per_year,
};
use crate::histogram::{RatingBinCount, rating_histogram};
use crate::stats::SummaryStats;
use crate::top_n::{PopularMovie, RatedMovie, TOP_N, top_popular, top_rated};

/// Every aggregate view over the full catalog.
///
/// Recomputed on each call; nothing here is cached between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub stats: SummaryStats,
    pub genre_distribution: Vec<GenreCount>,
    pub rating_distribution: Vec<RatingBinCount>,
    pub movies_per_year: Vec<YearCount>,
    pub language_distribution: Vec<LanguageCount>,
    pub top_popular: Vec<PopularMovie>,
    pub top_rated: Vec<RatedMovie>,
}

impl AnalyticsSnapshot {
    /// Compute all views. They are independent, so they run in parallel.
    pub fn compute(dataset: &Dataset) -> Self {
        let start_time = Instant::now();

        let ((genres, languages), ((ratings, years), (popular, rated))) = rayon::join(
            || rayon::join(|| genre_counts(dataset), || language_counts(dataset)),
            || {
                rayon::join(
                    || rayon::join(|| rating_histogram(dataset), || movies_per_year(dataset)),
                    || rayon::join(|| top_popular(dataset, TOP_N), || top_rated(dataset, TOP_N)),
                )
            },
        );

        let snapshot = Self {
            stats: SummaryStats::compute(dataset, genres.len()),
            genre_distribution: genre_distribution(&genres),
            rating_distribution: ratings,
            movies_per_year: years,
            language_distribution: language_distribution(&languages),
            top_popular: popular,
            top_rated: rated,
        };

        debug!(
            "Computed analytics over {} movies in {:.2?}",
            dataset.len(),
            start_time.elapsed()
        );
        snapshot
    }
}
