//! Top-N rankings.
//!
//! Both rankings use a stable descending sort, so ties come out in dataset
//! order.

use data_loader::{Dataset, MovieRecord};
use serde::{Deserialize, Serialize};

use crate::round2;

/// Entries in each top-N list.
pub const TOP_N: usize = 10;
/// Minimum `vote_count` for the top-rated list.
pub const MIN_VOTES_FOR_TOP_RATED: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularMovie {
    pub title: String,
    pub popularity: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedMovie {
    pub title: String,
    pub rating: f64,
    pub votes: i64,
}

/// The `n` records with the highest `key`, skipping records where `key` is `None`.
pub fn top_n_by<'a, I, F>(records: I, n: usize, key: F) -> Vec<(&'a MovieRecord, f64)>
where
    I: IntoIterator<Item = &'a MovieRecord>,
    F: Fn(&MovieRecord) -> Option<f64>,
{
    let mut ranked: Vec<(&MovieRecord, f64)> = records
        .into_iter()
        .filter_map(|record| key(record).map(|value| (record, value)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Most popular records that also have a rating.
pub fn top_popular(dataset: &Dataset, n: usize) -> Vec<PopularMovie> {
    let rated = dataset.iter().filter(|record| record.vote_average.is_some());

    top_n_by(rated, n, |record| record.popularity)
        .into_iter()
        .map(|(record, popularity)| PopularMovie {
            title: record.title.clone(),
            popularity: round2(popularity),
            rating: round2(record.vote_average.unwrap_or_default()),
        })
        .collect()
}

/// Highest rated records among those with at least `MIN_VOTES_FOR_TOP_RATED` votes.
pub fn top_rated(dataset: &Dataset, n: usize) -> Vec<RatedMovie> {
    let well_voted = dataset.iter().filter(|record| {
        record
            .vote_count
            .is_some_and(|votes| votes >= MIN_VOTES_FOR_TOP_RATED)
    });

    top_n_by(well_voted, n, |record| record.vote_average)
        .into_iter()
        .map(|(record, rating)| RatedMovie {
            title: record.title.clone(),
            rating: round2(rating),
            votes: record.vote_count.unwrap_or_default(),
        })
        .collect()
}
