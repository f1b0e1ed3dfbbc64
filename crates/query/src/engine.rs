//! # Query Engine
//!
//! Evaluates a QuerySpec against the dataset:
//! 1. Build the FilterPipeline for the request
//! 2. Filter the dataset (order preserved)
//! 3. Stable sort on the requested key, nulls last
//! 4. Count the matches, then cut out the requested page
//!
//! The dataset is only borrowed. Each call sorts its own vector of
//! references, so concurrent queries never observe each other.

use std::sync::Arc;
use std::time::Instant;

use data_loader::{Dataset, MovieRecord};
use tracing::debug;

use crate::filter_pipeline::FilterPipeline;
use crate::pagination::paginate;
use crate::query_spec::QuerySpec;
use crate::sort::sort_records;

/// One page of listing results.
#[derive(Debug, Clone)]
pub struct MoviePage<'a> {
    /// Number of records matching every filter, before pagination
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub movies: Vec<&'a MovieRecord>,
}

/// Runs listing queries over a shared, immutable dataset.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
}

impl QueryEngine {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Evaluate `spec` and return the requested page plus the total match count.
    pub fn execute(&self, spec: &QuerySpec) -> MoviePage<'_> {
        execute(&self.dataset, spec)
    }
}

/// Evaluate `spec` against `dataset`.
pub fn execute<'a>(dataset: &'a Dataset, spec: &QuerySpec) -> MoviePage<'a> {
    let start_time = Instant::now();

    let pipeline = FilterPipeline::from_spec(spec);
    let mut matched = pipeline.apply(dataset.iter().collect());
    sort_records(&mut matched, spec.sort_by, spec.sort_order);

    let total = matched.len();
    let movies = paginate(matched, spec.page, spec.per_page);

    debug!(
        "Query matched {} of {} movies ({} filters, sort {} {}), returning {} in {:.2?}",
        total,
        dataset.len(),
        pipeline.len(),
        spec.sort_by.as_str(),
        spec.sort_order.as_str(),
        movies.len(),
        start_time.elapsed()
    );

    MoviePage {
        total,
        page: spec.page,
        per_page: spec.per_page,
        movies,
    }
}
