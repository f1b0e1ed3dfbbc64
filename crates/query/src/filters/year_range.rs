//! Filter on release year.

use crate::filters::within_bounds;
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records released within `[min, max]` (either bound optional).
///
/// Records with an unknown release year are excluded whenever a bound is set.
pub struct YearRangeFilter {
    min: Option<i32>,
    max: Option<i32>,
}

impl YearRangeFilter {
    pub fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        within_bounds(record.release_year, self.min, self.max)
    }
}
