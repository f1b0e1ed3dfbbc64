//! Catalog-wide summary statistics.

use data_loader::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::round2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_movies: usize,
    /// Mean of present `vote_average` values, 0 when none are present
    pub avg_rating: f64,
    /// Mean of present `popularity` values, 0 when none are present
    pub avg_popularity: f64,
    pub total_languages: usize,
    /// `[min, max]` release year, `[0, 0]` when no year is known
    pub year_range: [i32; 2],
    pub total_genres: usize,
}

impl SummaryStats {
    /// Compute the summary. `total_genres` comes from the genre count pass
    /// so the catalog is not walked twice for it.
    pub fn compute(dataset: &Dataset, total_genres: usize) -> Self {
        let avg_rating = mean(dataset.iter().filter_map(|r| r.vote_average));
        let avg_popularity = mean(dataset.iter().filter_map(|r| r.popularity));

        let total_languages = dataset
            .iter()
            .map(|r| r.original_language.as_str())
            .filter(|language| !language.is_empty())
            .collect::<HashSet<_>>()
            .len();

        Self {
            total_movies: dataset.len(),
            avg_rating: avg_rating.map(round2).unwrap_or(0.0),
            avg_popularity: avg_popularity.map(round2).unwrap_or(0.0),
            total_languages,
            year_range: year_bounds(dataset).unwrap_or([0, 0]),
            total_genres,
        }
    }
}

/// `[min, max]` over known release years.
pub fn year_bounds(dataset: &Dataset) -> Option<[i32; 2]> {
    dataset
        .iter()
        .filter_map(|r| r.release_year)
        .fold(None, |bounds, year| match bounds {
            None => Some([year, year]),
            Some([min, max]) => Some([min.min(year), max.max(year)]),
        })
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieRecord;

    #[test]
    fn test_summary() {
        let dataset = Dataset::new(vec![
            MovieRecord {
                vote_average: Some(7.0),
                popularity: Some(10.0),
                original_language: "en".to_string(),
                release_year: Some(1999),
                ..Default::default()
            },
            MovieRecord {
                vote_average: Some(8.0),
                popularity: None,
                original_language: "fr".to_string(),
                release_year: Some(1977),
                ..Default::default()
            },
            MovieRecord {
                vote_average: None,
                popularity: Some(5.333),
                original_language: "en".to_string(),
                release_year: None,
                ..Default::default()
            },
            MovieRecord::default(),
        ]);

        let stats = SummaryStats::compute(&dataset, 4);
        assert_eq!(stats.total_movies, 4);
        assert_eq!(stats.avg_rating, 7.5);
        assert_eq!(stats.avg_popularity, 7.67);
        assert_eq!(stats.total_languages, 2);
        assert_eq!(stats.year_range, [1977, 1999]);
        assert_eq!(stats.total_genres, 4);
    }

    #[test]
    fn test_summary_without_values() {
        let dataset = Dataset::new(vec![MovieRecord::default()]);
        let stats = SummaryStats::compute(&dataset, 0);
        assert_eq!(stats.avg_rating, 0.0);
        assert_eq!(stats.avg_popularity, 0.0);
        assert_eq!(stats.total_languages, 0);
        assert_eq!(stats.year_range, [0, 0]);
    }
}
