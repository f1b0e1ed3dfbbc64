//! Filter on average vote.

use crate::filters::within_bounds;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records whose `vote_average` lies within `[min, max]`.
///
/// A record without a rating is excluded by either bound.
pub struct RatingRangeFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl RatingRangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl Filter for RatingRangeFilter {
    fn name(&self) -> &str {
        "RatingRangeFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        within_bounds(record.vote_average, self.min, self.max)
    }
}
