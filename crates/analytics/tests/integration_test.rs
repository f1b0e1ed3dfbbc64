//! Integration tests for the analytics snapshot.
//!
//! Builds a catalog through the CSV loader so the tests cover the same
//! coerced fields the service sees.

use analytics::distribution::genre_counts;
use analytics::{AnalyticsSnapshot, FilterOptions};
use data_loader::Dataset;

const CSV: &str = "\
id,title,original_title,overview,genre_ids,release_date,vote_average,vote_count,popularity,original_language,poster_path,backdrop_path
1,Heat,Heat,Heist,\"[28, 80, 18]\",1995-12-15,7.9,6000,40.2,en,/heat.jpg,/heat_bd.jpg
2,Amelie,Le Fabuleux Destin,Paris,\"[35, 10749]\",2001-04-25,7.9,9000,25.0,fr,,
3,Spirited Away,Sen to Chihiro,Spirits,\"[16, 10751, 14]\",2001-07-20,8.5,15000,60.123,ja,/sa.jpg,
4,Obscure,Obscure,,[18],not a date,abc,12,1.5,en,,
5,Missing Data,,,,,,,,nan,,
6,Old Classic,Old Classic,Black and white,\"[18, 99999]\",1950-01-01,8.1,150,3.0,en,,
";

fn load() -> Dataset {
    Dataset::load_from_reader(CSV.as_bytes(), "fixture").unwrap()
}

#[test]
fn test_snapshot_over_loaded_catalog() {
    let dataset = load();
    let snapshot = AnalyticsSnapshot::compute(&dataset);

    assert_eq!(snapshot.stats.total_movies, 6);
    assert_eq!(snapshot.stats.total_languages, 3);
    assert_eq!(snapshot.stats.year_range, [1950, 2001]);
    // Action, Crime, Drama, Comedy, Romance, Animation, Family, Fantasy, "99999"
    assert_eq!(snapshot.stats.total_genres, 9);
    assert_eq!(snapshot.genre_distribution[0].genre, "Drama");
    assert_eq!(snapshot.genre_distribution[0].count, 3);

    let histogram_total: usize = snapshot.rating_distribution.iter().map(|b| b.count).sum();
    let rated = dataset.iter().filter(|r| r.vote_average.is_some()).count();
    assert_eq!(histogram_total, rated);
    assert_eq!(snapshot.rating_distribution.len(), 8);

    let years: Vec<i32> = snapshot.movies_per_year.iter().map(|y| y.year).collect();
    assert_eq!(years, vec![1995, 2001]);
    assert_eq!(snapshot.movies_per_year[1].count, 2);

    assert_eq!(snapshot.language_distribution[0].language, "en");
    assert_eq!(snapshot.language_distribution[0].count, 3);

    let popular: Vec<&str> = snapshot.top_popular.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(popular, vec!["Spirited Away", "Heat", "Amelie", "Old Classic"]);
    assert_eq!(snapshot.top_popular[0].popularity, 60.12);

    let rated: Vec<&str> = snapshot.top_rated.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(rated, vec!["Spirited Away", "Old Classic", "Heat", "Amelie"]);
}

#[test]
fn test_genre_distribution_counts_every_pair() {
    let dataset = load();
    let pairs: usize = dataset.iter().map(|r| r.genre_names.len()).sum();
    assert_eq!(genre_counts(&dataset).total(), pairs);
}

#[test]
fn test_snapshot_serializes_expected_shape() {
    let snapshot = AnalyticsSnapshot::compute(&load());
    let json = serde_json::to_value(&snapshot).unwrap();

    for key in [
        "stats",
        "genre_distribution",
        "rating_distribution",
        "movies_per_year",
        "language_distribution",
        "top_popular",
        "top_rated",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["rating_distribution"][0]["range"], "0-2");
    assert_eq!(json["top_rated"][0]["votes"], 15000);
    assert_eq!(json["stats"]["year_range"][0], 1950);
}

#[test]
fn test_filter_options_over_loaded_catalog() {
    let options = FilterOptions::from_dataset(&load());
    assert_eq!(options.languages, vec!["en", "fr", "ja"]);
    assert!(options.genres.contains(&"99999".to_string()));
    assert!(options.genres.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!((options.year_min, options.year_max), (1950, 2001));
}

#[test]
fn test_empty_catalog() {
    let snapshot = AnalyticsSnapshot::compute(&Dataset::default());
    assert_eq!(snapshot.stats.total_movies, 0);
    assert_eq!(snapshot.stats.year_range, [0, 0]);
    assert!(snapshot.genre_distribution.is_empty());
    assert!(snapshot.rating_distribution.iter().all(|bin| bin.count == 0));
    assert!(snapshot.top_popular.is_empty());
}
