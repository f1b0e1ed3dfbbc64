//! # Analytics Crate
//!
//! Aggregate views over the whole movie catalog, plus the filter options
//! offered to listing clients. Nothing here looks at a listing request:
//! every function reads the full `Dataset`.
//!
//! ## Components
//!
//! - **histogram**: rating histogram over a fixed, labeled bin table
//! - **distribution**: genre, language and per-year frequency counts
//! - **top_n**: most popular and highest rated movies
//! - **stats**: summary statistics (means, distinct counts, year range)
//! - **snapshot**: `AnalyticsSnapshot`, all of the above in one bundle
//! - **options**: `FilterOptions`, distinct genres/languages and year bounds
//!
//! ## Example Usage
//!
//! ```ignore
//! use analytics::{AnalyticsSnapshot, FilterOptions};
//!
//! let snapshot = AnalyticsSnapshot::compute(&dataset);
//! println!("{} movies, avg rating {}", snapshot.stats.total_movies, snapshot.stats.avg_rating);
//!
//! let options = FilterOptions::from_dataset(&dataset);
//! println!("Years {}-{}", options.year_min, options.year_max);
//! ```
//!
//! ## Tie-breaking
//!
//! Every ranking (genres, languages, top popular, top rated) is a stable
//! descending sort, so equal values appear in the order the dataset first
//! presents them.

pub mod distribution;
pub mod histogram;
pub mod options;
pub mod snapshot;
pub mod stats;
pub mod top_n;

// Re-export commonly used types
pub use distribution::{FrequencyCounter, GenreCount, LanguageCount, YearCount};
pub use histogram::{RATING_BINS, RatingBin, RatingBinCount, bin_index, rating_histogram};
pub use options::FilterOptions;
pub use snapshot::AnalyticsSnapshot;
pub use stats::SummaryStats;
pub use top_n::{PopularMovie, RatedMovie};

/// Round to two decimal places for reporting, ties to even.
///
/// The tie test sees the scaled binary value, so `2.675` (stored just
/// below the tie) rounds down to `2.67` and an exact `0.125` goes to `0.12`.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
