//! The FilterPipeline chains listing predicates.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern, and builds one from a QuerySpec.

use crate::filters::{GenreFilter, LanguageFilter, RatingRangeFilter, SearchFilter, YearRangeFilter};
use crate::query_spec::QuerySpec;
use crate::traits::Filter;
use data_loader::MovieRecord;
use tracing::debug;

/// Chains multiple filters together into an AND of predicates.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Drama"))
///     .add_filter(YearRangeFilter::new(Some(1990), None));
///
/// let matching = pipeline.apply(dataset.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline (matches everything).
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a listing request.
    ///
    /// Only predicates the request actually specifies are added, so an
    /// empty QuerySpec yields an empty pipeline.
    pub fn from_spec(spec: &QuerySpec) -> Self {
        let mut pipeline = Self::new();

        if let Some(text) = spec.search_text() {
            pipeline = pipeline.add_filter(SearchFilter::new(text));
        }
        if let Some(genre) = spec.genre_name() {
            pipeline = pipeline.add_filter(GenreFilter::new(genre));
        }
        if let Some(language) = spec.language_code() {
            pipeline = pipeline.add_filter(LanguageFilter::new(language));
        }
        let (year_min, year_max) = spec.year_bounds();
        if year_min.is_some() || year_max.is_some() {
            pipeline = pipeline.add_filter(YearRangeFilter::new(year_min, year_max));
        }
        if spec.rating_min.is_some() || spec.rating_max.is_some() {
            pipeline =
                pipeline.add_filter(RatingRangeFilter::new(spec.rating_min, spec.rating_max));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence, preserving record order.
    pub fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        let mut current = records;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
