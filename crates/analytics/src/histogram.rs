//! Rating histogram over fixed, labeled bins.
//!
//! Bins are half-open `[lower, upper)` except the last, which also takes
//! 10.0. Values outside `[0, 10]` are clamped into the first or last bin so
//! every rated record is counted exactly once.

use data_loader::Dataset;
use serde::{Deserialize, Serialize};

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBin {
    pub lower: f64,
    pub upper: f64,
    pub label: &'static str,
}

/// The rating bins, ascending. Edges: 0, 2, 4, 5, 6, 7, 8, 9, 10.
pub const RATING_BINS: [RatingBin; 8] = [
    RatingBin { lower: 0.0, upper: 2.0, label: "0-2" },
    RatingBin { lower: 2.0, upper: 4.0, label: "2-4" },
    RatingBin { lower: 4.0, upper: 5.0, label: "4-5" },
    RatingBin { lower: 5.0, upper: 6.0, label: "5-6" },
    RatingBin { lower: 6.0, upper: 7.0, label: "6-7" },
    RatingBin { lower: 7.0, upper: 8.0, label: "7-8" },
    RatingBin { lower: 8.0, upper: 9.0, label: "8-9" },
    RatingBin { lower: 9.0, upper: 10.0, label: "9-10" },
];

/// Count of rated records in one bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBinCount {
    pub range: String,
    pub count: usize,
}

/// Index into `RATING_BINS` for a rating value.
pub fn bin_index(value: f64) -> usize {
    let last = RATING_BINS.len() - 1;
    if value >= RATING_BINS[last].lower {
        return last;
    }
    RATING_BINS
        .iter()
        .position(|bin| value < bin.upper)
        .unwrap_or(last)
}

/// Histogram of `vote_average`, every bin reported (zero counts included).
pub fn rating_histogram(dataset: &Dataset) -> Vec<RatingBinCount> {
    let mut counts = [0usize; RATING_BINS.len()];
    for rating in dataset.iter().filter_map(|record| record.vote_average) {
        counts[bin_index(rating)] += 1;
    }

    RATING_BINS
        .iter()
        .zip(counts)
        .map(|(bin, count)| RatingBinCount {
            range: bin.label.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieRecord;

    fn rated(values: &[Option<f64>]) -> Dataset {
        values
            .iter()
            .map(|&vote_average| MovieRecord {
                vote_average,
                ..Default::default()
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_bins_are_contiguous() {
        for pair in RATING_BINS.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
        assert_eq!(RATING_BINS[0].lower, 0.0);
        assert_eq!(RATING_BINS[RATING_BINS.len() - 1].upper, 10.0);
    }

    #[test]
    fn test_bin_edges() {
        assert_eq!(RATING_BINS[bin_index(0.0)].label, "0-2");
        assert_eq!(RATING_BINS[bin_index(1.99)].label, "0-2");
        assert_eq!(RATING_BINS[bin_index(2.0)].label, "2-4");
        assert_eq!(RATING_BINS[bin_index(4.5)].label, "4-5");
        assert_eq!(RATING_BINS[bin_index(5.0)].label, "5-6");
        assert_eq!(RATING_BINS[bin_index(9.0)].label, "9-10");
        assert_eq!(RATING_BINS[bin_index(10.0)].label, "9-10");
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        assert_eq!(RATING_BINS[bin_index(-1.0)].label, "0-2");
        assert_eq!(RATING_BINS[bin_index(11.0)].label, "9-10");
    }

    #[test]
    fn test_histogram_example() {
        let histogram = rating_histogram(&rated(&[Some(1.5), Some(5.0), Some(9.9), None]));
        let counts: Vec<(&str, usize)> = histogram
            .iter()
            .map(|bin| (bin.range.as_str(), bin.count))
            .collect();

        assert_eq!(
            counts,
            vec![
                ("0-2", 1),
                ("2-4", 0),
                ("4-5", 0),
                ("5-6", 1),
                ("6-7", 0),
                ("7-8", 0),
                ("8-9", 0),
                ("9-10", 1),
            ]
        );
    }

    #[test]
    fn test_histogram_sums_to_rated_count() {
        let values = [Some(0.0), Some(3.3), None, Some(7.0), Some(10.0), None, Some(6.5)];
        let histogram = rating_histogram(&rated(&values));
        let total: usize = histogram.iter().map(|bin| bin.count).sum();
        assert_eq!(total, 5);
    }
}
