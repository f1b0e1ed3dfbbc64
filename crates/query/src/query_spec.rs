//! Listing request parameters.
//!
//! `QuerySpec` deserializes straight from a query string: every filter is
//! optional, paging defaults to page 1 of 20, and sort parameters never
//! fail to parse (unknown values fall back to the defaults).

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 20;

/// Column a listing is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SortKey {
    #[default]
    Popularity,
    /// `vote_average`
    Rating,
    /// `vote_count`
    Votes,
    /// `release_year`
    Year,
    Title,
}

impl SortKey {
    /// Parse a `sort_by` value. Anything outside the whitelist sorts by popularity.
    pub fn parse(value: &str) -> Self {
        match value {
            "popularity" => SortKey::Popularity,
            "rating" => SortKey::Rating,
            "votes" => SortKey::Votes,
            "year" => SortKey::Year,
            "title" => SortKey::Title,
            _ => SortKey::Popularity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Rating => "rating",
            SortKey::Votes => "votes",
            SortKey::Year => "year",
            SortKey::Title => "title",
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::parse(&value)
    }
}

impl From<SortKey> for &'static str {
    fn from(key: SortKey) -> Self {
        key.as_str()
    }
}

/// Sort direction. Only an explicit `"asc"` sorts ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn parse(value: &str) -> Self {
        if value == "asc" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl From<String> for SortOrder {
    fn from(value: String) -> Self {
        SortOrder::parse(&value)
    }
}

impl From<SortOrder> for &'static str {
    fn from(order: SortOrder) -> Self {
        order.as_str()
    }
}

/// Filters, sort and paging for one listing request.
///
/// Empty strings for `search`, `genre` and `language` count as "not given",
/// as does a year bound of 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search: None,
            genre: None,
            language: None,
            year_min: None,
            year_max: None,
            rating_min: None,
            rating_max: None,
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: sort by `key` in `order`.
    pub fn sorted(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = key;
        self.sort_order = order;
        self
    }

    /// Builder: request page `page` of size `per_page`.
    pub fn paged(mut self, page: usize, per_page: usize) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    /// The search text, if one was actually given.
    pub fn search_text(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn genre_name(&self) -> Option<&str> {
        non_empty(&self.genre)
    }

    pub fn language_code(&self) -> Option<&str> {
        non_empty(&self.language)
    }

    /// Year bounds actually given. Year 0 is not a release year and counts
    /// as "not given", like an empty string does for the text filters.
    pub fn year_bounds(&self) -> (Option<i32>, Option<i32>) {
        let given = |year: Option<i32>| year.filter(|&y| y != 0);
        (given(self.year_min), given(self.year_max))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
