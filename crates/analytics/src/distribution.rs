//! Frequency distributions over the whole catalog.

use data_loader::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Genres reported in the genre distribution.
pub const TOP_GENRES: usize = 15;
/// Languages reported in the language distribution.
pub const TOP_LANGUAGES: usize = 10;
/// First year included in the movies-per-year series.
pub const FIRST_REPORTED_YEAR: i32 = 1990;

/// Counts occurrences while remembering first-seen order.
///
/// `most_common` breaks ties by that order, so equal counts always come
/// out in the order the dataset first mentioned them.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    positions: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        match self.positions.get(&key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Up to `n` keys by descending count, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<K: Eq + Hash + Clone> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Count every (record, genre) pair. A record counts once per genre it carries.
pub fn genre_counts(dataset: &Dataset) -> FrequencyCounter<&str> {
    let mut counter = FrequencyCounter::new();
    for genre in dataset.iter().flat_map(|record| record.genre_names.iter()) {
        counter.add(genre);
    }
    counter
}

/// The `TOP_GENRES` most frequent genres.
pub fn genre_distribution(counts: &FrequencyCounter<&str>) -> Vec<GenreCount> {
    counts
        .most_common(TOP_GENRES)
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: genre.to_string(),
            count,
        })
        .collect()
}

/// Count records per original language. Records without one are skipped.
pub fn language_counts(dataset: &Dataset) -> FrequencyCounter<&str> {
    let mut counter = FrequencyCounter::new();
    for record in dataset.iter() {
        if !record.original_language.is_empty() {
            counter.add(record.original_language.as_str());
        }
    }
    counter
}

/// The `TOP_LANGUAGES` most frequent original languages.
pub fn language_distribution(counts: &FrequencyCounter<&str>) -> Vec<LanguageCount> {
    counts
        .most_common(TOP_LANGUAGES)
        .into_iter()
        .map(|(language, count)| LanguageCount {
            language: language.to_string(),
            count,
        })
        .collect()
}

/// Records per release year from `FIRST_REPORTED_YEAR` on, ascending.
pub fn movies_per_year(dataset: &Dataset) -> Vec<YearCount> {
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for year in dataset.iter().filter_map(|record| record.release_year) {
        if year >= FIRST_REPORTED_YEAR {
            *per_year.entry(year).or_insert(0) += 1;
        }
    }

    per_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{GenreNames, MovieRecord};

    fn record(genres: &[&str], language: &str, year: Option<i32>) -> MovieRecord {
        MovieRecord {
            genre_names: GenreNames::from(genres.iter().map(|g| g.to_string()).collect::<Vec<_>>()),
            original_language: language.to_string(),
            release_year: year,
            ..Default::default()
        }
    }

    #[test]
    fn test_counter_ties_keep_first_seen_order() {
        let mut counter = FrequencyCounter::new();
        for key in ["b", "a", "c", "a", "c", "d"] {
            counter.add(key);
        }
        assert_eq!(counter.len(), 4);
        assert_eq!(counter.total(), 6);
        assert_eq!(
            counter.most_common(3),
            vec![("a", 2), ("c", 2), ("b", 1)]
        );
    }

    #[test]
    fn test_genre_counts_sum_to_pairs() {
        let dataset = Dataset::new(vec![
            record(&["Drama", "Crime"], "en", Some(1995)),
            record(&["Comedy"], "fr", Some(2001)),
            record(&[], "en", None),
            record(&["Drama", "Romance", "Comedy"], "", Some(1985)),
        ]);

        let counts = genre_counts(&dataset);
        assert_eq!(counts.total(), 6);

        let distribution = genre_distribution(&counts);
        assert_eq!(distribution[0], GenreCount { genre: "Drama".to_string(), count: 2 });
        assert_eq!(distribution[1], GenreCount { genre: "Comedy".to_string(), count: 2 });
        assert_eq!(distribution[2].genre, "Crime");
        assert_eq!(distribution[3].genre, "Romance");
    }

    #[test]
    fn test_genre_distribution_is_capped() {
        let records = (0..20)
            .map(|i| record(&[format!("G{i}").as_str()], "en", None))
            .collect();
        let dataset = Dataset::new(records);
        let counts = genre_counts(&dataset);
        assert_eq!(counts.len(), 20);
        assert_eq!(genre_distribution(&counts).len(), TOP_GENRES);
    }

    #[test]
    fn test_language_distribution_skips_empty() {
        let dataset = Dataset::new(vec![
            record(&[], "en", None),
            record(&[], "", None),
            record(&[], "fr", None),
            record(&[], "en", None),
        ]);
        let languages = language_distribution(&language_counts(&dataset));
        assert_eq!(
            languages,
            vec![
                LanguageCount { language: "en".to_string(), count: 2 },
                LanguageCount { language: "fr".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_movies_per_year_from_1990() {
        let dataset = Dataset::new(vec![
            record(&[], "en", Some(2001)),
            record(&[], "en", Some(1989)),
            record(&[], "en", Some(1990)),
            record(&[], "en", None),
            record(&[], "en", Some(2001)),
        ]);
        assert_eq!(
            movies_per_year(&dataset),
            vec![
                YearCount { year: 1990, count: 1 },
                YearCount { year: 2001, count: 2 },
            ]
        );
    }
}
