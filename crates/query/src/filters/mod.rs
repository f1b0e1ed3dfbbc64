//! Filter implementations for the listing pipeline.
//!
//! One type per listing predicate. Each can be composed into a
//! FilterPipeline in any order.

pub mod genre;
pub mod language;
pub mod rating_range;
pub mod search;
pub mod year_range;

// Re-export for convenience
pub use genre::GenreFilter;
pub use language::LanguageFilter;
pub use rating_range::RatingRangeFilter;
pub use search::SearchFilter;
pub use year_range::YearRangeFilter;

/// Inclusive bound check shared by the numeric range filters.
///
/// A missing value never satisfies a bound: with any bound set, `None` is
/// excluded rather than passed through.
pub(crate) fn within_bounds<T: PartialOrd + Copy>(
    value: Option<T>,
    min: Option<T>,
    max: Option<T>,
) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}
