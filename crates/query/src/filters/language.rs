//! Filter on original language.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records whose `original_language` equals the given code.
pub struct LanguageFilter {
    language: String,
}

impl LanguageFilter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        record.original_language == self.language
    }
}
