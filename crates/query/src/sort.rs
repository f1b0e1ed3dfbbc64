//! Stable, nulls-last sorting of listing results.

use crate::query_spec::{SortKey, SortOrder};
use data_loader::MovieRecord;
use std::cmp::Ordering;

impl SortKey {
    /// Compare two records on this key.
    ///
    /// Missing values go after present ones in both directions; only the
    /// comparison between two present values is reversed for descending.
    pub fn compare(self, a: &MovieRecord, b: &MovieRecord, order: SortOrder) -> Ordering {
        match self {
            SortKey::Popularity => nulls_last(a.popularity, b.popularity, order, f64::total_cmp),
            SortKey::Rating => nulls_last(a.vote_average, b.vote_average, order, f64::total_cmp),
            SortKey::Votes => nulls_last(a.vote_count, b.vote_count, order, Ord::cmp),
            SortKey::Year => nulls_last(a.release_year, b.release_year, order, Ord::cmp),
            SortKey::Title => nulls_last(
                Some(a.title.as_str()),
                Some(b.title.as_str()),
                order,
                Ord::cmp,
            ),
        }
    }
}

fn nulls_last<T>(
    a: Option<T>,
    b: Option<T>,
    order: SortOrder,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => cmp(&a, &b),
            SortOrder::Descending => cmp(&b, &a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort matched records in place.
///
/// `sort_by` is stable, so records with equal keys keep dataset order and
/// pages stay consistent between requests.
pub fn sort_records(records: &mut [&MovieRecord], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| key.compare(a, b, order));
}
