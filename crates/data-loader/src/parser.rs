//! Per-column coercion for the movie CSV.
//!
//! Each source column goes through exactly one function here, and none of
//! them can fail: a bad cell becomes an empty string, `None`, or an empty
//! list for that field only. Rows are never dropped.
//!
//! | column            | function              | on bad input |
//! |-------------------|-----------------------|--------------|
//! | id, vote_count    | `parse_integer`       | `None`       |
//! | popularity, vote_average | `parse_float`  | `None`       |
//! | release_date      | `parse_release_date`  | `None` year and month |
//! | genre_ids         | `parse_genre_codes`   | empty list   |
//! | text and path columns | `normalize_text`  | `""`         |

use crate::genres;
use crate::types::{GenreCode, GenreNames, MovieRecord};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use csv::ByteRecord;
use std::borrow::Cow;

/// Cell values that mean "missing" even though the cell is not empty.
const PLACEHOLDERS: [&str; 3] = ["nan", "none", "null"];

/// Date layouts accepted for `release_date`, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

// =============================================================================
// Column coercions
// =============================================================================

/// Normalize a free-text or path cell to a non-null string.
///
/// Missing cells and placeholder text ("nan", "None", "NULL", ...) become
/// the empty string. Anything else is kept verbatim.
pub fn normalize_text(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !is_missing(s) => s.to_string(),
        _ => String::new(),
    }
}

/// Parse a floating point cell. Non-numeric and non-finite values are `None`.
pub fn parse_float(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Parse an integer cell.
///
/// Integer text parses directly. Float text such as `"120.0"` is accepted
/// and truncated toward zero, since spreadsheet exports often write counts
/// that way.
pub fn parse_integer(raw: Option<&str>) -> Option<i64> {
    let trimmed = raw?.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = parse_float(Some(trimmed))?.trunc();
    if value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Parse the embedded genre code list, e.g. `"[28, 12, 878]"`.
///
/// Accepts an optional `[...]` or `(...)` wrapper, comma-separated signed
/// integers, surrounding whitespace and a single trailing comma. Any other
/// shape yields an empty list.
pub fn parse_genre_codes(raw: Option<&str>) -> Vec<GenreCode> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let trimmed = raw.trim();
    let inner = strip_wrapper(trimmed, '[', ']')
        .or_else(|| strip_wrapper(trimmed, '(', ')'))
        .unwrap_or(trimmed)
        .trim();

    if inner.is_empty() {
        return Vec::new();
    }
    let inner = inner.strip_suffix(',').unwrap_or(inner);

    inner
        .split(',')
        .map(|item| item.trim().parse::<GenreCode>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}

/// Map genre codes to display names, keeping order and unknown codes.
pub fn genre_names_for(codes: &[GenreCode]) -> GenreNames {
    codes.iter().map(|&code| genres::display_name(code)).collect()
}

/// Calendar-parse a release date.
///
/// Accepts full dates in a few common layouts, date-times, `YYYY-MM`, and a
/// bare `YYYY` (taken as January 1st).
pub fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    {
        return Some(date);
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Some(datetime.date());
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        return Some(date);
    }

    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let year = trimmed.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

fn is_missing(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.is_empty()
        || PLACEHOLDERS
            .iter()
            .any(|placeholder| trimmed.eq_ignore_ascii_case(placeholder))
}

fn strip_wrapper(s: &str, open: char, close: char) -> Option<&str> {
    s.strip_prefix(open)?.strip_suffix(close)
}

// =============================================================================
// Row decoding
// =============================================================================

/// Positions of the known columns in the header row.
///
/// A column absent from the header stays `None`, which degrades that field
/// on every row instead of failing the load.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    id: Option<usize>,
    title: Option<usize>,
    original_title: Option<usize>,
    overview: Option<usize>,
    genre_ids: Option<usize>,
    release_date: Option<usize>,
    vote_average: Option<usize>,
    vote_count: Option<usize>,
    popularity: Option<usize>,
    original_language: Option<usize>,
    poster_path: Option<usize>,
    backdrop_path: Option<usize>,
}

impl ColumnMap {
    /// Locate columns by (trimmed) header name.
    pub fn from_headers(headers: &ByteRecord) -> Self {
        let mut columns = Self::default();
        for (idx, name) in headers.iter().enumerate() {
            let name = String::from_utf8_lossy(name);
            let slot = match name.trim() {
                "id" => &mut columns.id,
                "title" => &mut columns.title,
                "original_title" => &mut columns.original_title,
                "overview" => &mut columns.overview,
                "genre_ids" => &mut columns.genre_ids,
                "release_date" => &mut columns.release_date,
                "vote_average" => &mut columns.vote_average,
                "vote_count" => &mut columns.vote_count,
                "popularity" => &mut columns.popularity,
                "original_language" => &mut columns.original_language,
                "poster_path" => &mut columns.poster_path,
                "backdrop_path" => &mut columns.backdrop_path,
                _ => continue,
            };
            // First occurrence wins for duplicated headers
            slot.get_or_insert(idx);
        }
        columns
    }

    /// Names of expected columns missing from the header.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        [
            ("id", self.id),
            ("title", self.title),
            ("original_title", self.original_title),
            ("overview", self.overview),
            ("genre_ids", self.genre_ids),
            ("release_date", self.release_date),
            ("vote_average", self.vote_average),
            ("vote_count", self.vote_count),
            ("popularity", self.popularity),
            ("original_language", self.original_language),
            ("poster_path", self.poster_path),
            ("backdrop_path", self.backdrop_path),
        ]
        .into_iter()
        .filter_map(|(name, idx)| idx.is_none().then_some(name))
        .collect()
    }

    /// Coerce one raw row into a typed record. Never fails.
    pub fn decode(&self, row: &ByteRecord) -> MovieRecord {
        let get = |column: Option<usize>| cell(row, column);

        let release_date = get(self.release_date);
        let parsed_date = parse_release_date(release_date.as_deref());
        let genre_codes = parse_genre_codes(get(self.genre_ids).as_deref());
        let genre_names = genre_names_for(&genre_codes);

        MovieRecord {
            id: parse_integer(get(self.id).as_deref()),
            title: normalize_text(get(self.title).as_deref()),
            original_title: normalize_text(get(self.original_title).as_deref()),
            overview: normalize_text(get(self.overview).as_deref()),
            original_language: normalize_text(get(self.original_language).as_deref()),
            release_date: normalize_text(release_date.as_deref()),
            popularity: parse_float(get(self.popularity).as_deref()),
            vote_average: parse_float(get(self.vote_average).as_deref()),
            vote_count: parse_integer(get(self.vote_count).as_deref()),
            release_year: parsed_date.map(|date| date.year()),
            release_month: parsed_date.map(|date| date.month()),
            genre_codes,
            genre_names,
            poster_path: normalize_text(get(self.poster_path).as_deref()),
            backdrop_path: normalize_text(get(self.backdrop_path).as_deref()),
        }
    }
}

/// Lossily decode one cell; invalid UTF-8 never fails a row.
fn cell(row: &ByteRecord, column: Option<usize>) -> Option<Cow<'_, str>> {
    column
        .and_then(|idx| row.get(idx))
        .map(String::from_utf8_lossy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_placeholders() {
        assert_eq!(normalize_text(None), "");
        assert_eq!(normalize_text(Some("")), "");
        assert_eq!(normalize_text(Some("nan")), "");
        assert_eq!(normalize_text(Some("NaN")), "");
        assert_eq!(normalize_text(Some("None")), "");
        assert_eq!(normalize_text(Some(" NULL ")), "");
        assert_eq!(normalize_text(Some("Nanook of the North")), "Nanook of the North");
        assert_eq!(normalize_text(Some("/abc.jpg")), "/abc.jpg");
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float(Some("7.5")), Some(7.5));
        assert_eq!(parse_float(Some(" 12 ")), Some(12.0));
        assert_eq!(parse_float(Some("abc")), None);
        assert_eq!(parse_float(Some("")), None);
        assert_eq!(parse_float(Some("nan")), None);
        assert_eq!(parse_float(Some("inf")), None);
        assert_eq!(parse_float(None), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(Some("550")), Some(550));
        assert_eq!(parse_integer(Some("120.0")), Some(120));
        assert_eq!(parse_integer(Some("99.9")), Some(99));
        assert_eq!(parse_integer(Some("many")), None);
        assert_eq!(parse_integer(None), None);
    }

    #[test]
    fn test_parse_genre_codes() {
        assert_eq!(parse_genre_codes(Some("[28, 12, 878]")), vec![28, 12, 878]);
        assert_eq!(parse_genre_codes(Some("(18,)")), vec![18]);
        assert_eq!(parse_genre_codes(Some("[]")), Vec::<GenreCode>::new());
        assert_eq!(parse_genre_codes(Some("[28, 'x']")), Vec::<GenreCode>::new());
        assert_eq!(parse_genre_codes(Some("[28, 12")), Vec::<GenreCode>::new());
        assert_eq!(parse_genre_codes(Some("nan")), Vec::<GenreCode>::new());
        assert_eq!(parse_genre_codes(None), Vec::<GenreCode>::new());
    }

    #[test]
    fn test_genre_names_keep_unknown_codes() {
        let names = genre_names_for(&[28, 4242, 18]);
        assert_eq!(names.as_slice(), ["Action", "4242", "Drama"]);
    }

    #[test]
    fn test_parse_release_date() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
        assert_eq!(parse_release_date(Some("2019-10-02")), date(2019, 10, 2));
        assert_eq!(parse_release_date(Some("2019/10/02")), date(2019, 10, 2));
        assert_eq!(parse_release_date(Some("10/02/2019")), date(2019, 10, 2));
        assert_eq!(parse_release_date(Some("2019-10-02T08:30:00")), date(2019, 10, 2));
        assert_eq!(parse_release_date(Some("2019-10")), date(2019, 10, 1));
        assert_eq!(parse_release_date(Some("2019")), date(2019, 1, 1));
        assert_eq!(parse_release_date(Some("2019-13-45")), None);
        assert_eq!(parse_release_date(Some("soon")), None);
        assert_eq!(parse_release_date(Some("")), None);
    }

    #[test]
    fn test_decode_degrades_fields_independently() {
        let headers = ByteRecord::from(vec![
            "id", "title", "genre_ids", "release_date", "vote_average", "poster_path",
        ]);
        let columns = ColumnMap::from_headers(&headers);
        let row = ByteRecord::from(vec!["x1", "Heat", "oops", "1995-12-15", "n/a", "nan"]);

        let record = columns.decode(&row);
        assert_eq!(record.id, None);
        assert_eq!(record.title, "Heat");
        assert!(record.genre_codes.is_empty());
        assert_eq!(record.release_year, Some(1995));
        assert_eq!(record.release_month, Some(12));
        assert_eq!(record.vote_average, None);
        assert_eq!(record.poster_path, "");
        // Columns missing from the header degrade too
        assert_eq!(record.overview, "");
        assert_eq!(record.popularity, None);
    }

    #[test]
    fn test_missing_columns() {
        let headers = ByteRecord::from(vec!["id", "title"]);
        let missing = ColumnMap::from_headers(&headers).missing_columns();
        assert!(missing.contains(&"overview"));
        assert!(!missing.contains(&"title"));
        assert_eq!(missing.len(), 10);
    }
}
