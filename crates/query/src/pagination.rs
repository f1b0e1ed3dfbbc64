//! Page slicing for listing results.
//!
//! Pages are 1-indexed. A page past the end (or page 0, or a page size of
//! 0) is simply empty; it is never an error and never clamped.

use std::ops::Range;

/// Index range of `page` within a result set of `total` items.
///
/// # Examples
/// ```
/// use query::pagination::page_range;
///
/// assert_eq!(page_range(45, 1, 20), 0..20);
/// assert_eq!(page_range(45, 3, 20), 40..45);
/// assert!(page_range(45, 4, 20).is_empty());
/// ```
pub fn page_range(total: usize, page: usize, per_page: usize) -> Range<usize> {
    let start = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(per_page));

    match start {
        Some(start) if start < total && per_page > 0 => {
            let end = start.saturating_add(per_page).min(total);
            start..end
        }
        _ => total..total,
    }
}

/// Take one page out of an already sorted result set.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Vec<T> {
    let range = page_range(items.len(), page, per_page);
    items
        .into_iter()
        .skip(range.start)
        .take(range.len())
        .collect()
}
