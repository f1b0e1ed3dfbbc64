//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets listing predicates be
//! composed independently of each other.

use data_loader::MovieRecord;
use rayon::prelude::*;

/// A single listing predicate.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be evaluated from rayon workers
/// - Filters only read records; the dataset is never modified
/// - Predicates are independent, so pipeline order never changes the result
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single record satisfies this predicate.
    fn matches(&self, record: &MovieRecord) -> bool;

    /// Keep the records that satisfy this predicate, preserving their order.
    fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        records
            .into_par_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
