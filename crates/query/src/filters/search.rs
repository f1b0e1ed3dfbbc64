//! Case-insensitive text search over title, overview and original title.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records whose title, overview or original title contains the
/// search text, ignoring case.
///
/// Empty fields never match, so an overview-less record can only be found
/// through its titles.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    fn field_matches(&self, field: &str) -> bool {
        !field.is_empty() && field.to_lowercase().contains(&self.needle)
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        self.field_matches(&record.title)
            || self.field_matches(&record.overview)
            || self.field_matches(&record.original_title)
    }
}
