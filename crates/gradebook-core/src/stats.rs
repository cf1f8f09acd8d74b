//! Descriptive statistics over the exam scores.
//!
//! Every statistic is `None` when the sample is too small for it to be
//! defined: the mean and median need at least one score, the sample standard
//! deviation at least two.

use serde::Serialize;

/// Scores in parse order until [`ScoreList::sort`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreList {
    scores: Vec<i32>,
}

impl ScoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, score: i32) {
        self.scores.push(score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.scores
    }

    /// Sort ascending in place.
    pub fn sort(&mut self) {
        self.scores.sort_unstable();
    }
}

impl From<Vec<i32>> for ScoreList {
    fn from(scores: Vec<i32>) -> Self {
        Self { scores }
    }
}

impl FromIterator<i32> for ScoreList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Arithmetic mean.
pub fn mean(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: f64 = scores.iter().map(|&s| f64::from(s)).sum();
    Some(sum / scores.len() as f64)
}

/// Bessel-corrected (n − 1) standard deviation around `mean`.
pub fn sample_std_dev(scores: &[i32], mean: f64) -> Option<f64> {
    if scores.len() < 2 {
        return None;
    }
    let squares: f64 = scores
        .iter()
        .map(|&s| (f64::from(s) - mean).powi(2))
        .sum();
    Some((squares / (scores.len() - 1) as f64).sqrt())
}

/// Median of an ascending slice.
pub fn median(sorted: &[i32]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(f64::from(sorted[mid]))
    } else {
        Some((f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0)
    }
}

/// Summary statistics printed at the end of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub average: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub median: Option<f64>,
}

impl Statistics {
    /// Compute all three statistics, leaving `scores` sorted.
    pub fn compute(scores: &mut ScoreList) -> Self {
        let average = mean(scores.as_slice());
        let standard_deviation = average.and_then(|m| sample_std_dev(scores.as_slice(), m));
        scores.sort();
        let median = median(scores.as_slice());

        Self {
            average,
            standard_deviation,
            median,
        }
    }
}

/// Round half away from zero to one decimal place.
///
/// `{:.1}` alone resolves exact ties such as `84.25` to even; report values
/// round those up instead.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[100]), Some(100.0));
        assert_eq!(mean(&[95, 72, 85]), Some(84.0));
        assert_eq!(mean(&[1, 2]), Some(1.5));
    }

    #[test]
    fn test_sample_std_dev() {
        assert_eq!(sample_std_dev(&[], 0.0), None);
        assert_eq!(sample_std_dev(&[100], 100.0), None);

        let sd = sample_std_dev(&[95, 72, 85], 84.0).unwrap();
        assert!(approx_eq(sd, 133.0_f64.sqrt()));

        // Population std-dev of [60,70,80,90] is ~11.18; sample is ~12.91
        let sd = sample_std_dev(&[60, 70, 80, 90], 75.0).unwrap();
        assert!(approx_eq(sd, (500.0_f64 / 3.0).sqrt()));
    }

    #[test]
    fn test_std_dev_of_identical_scores_is_zero() {
        assert_eq!(sample_std_dev(&[80, 80, 80], 80.0), Some(0.0));
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[42]), Some(42.0));
        assert_eq!(median(&[72, 85, 95]), Some(85.0));
        assert_eq!(median(&[60, 70, 80, 90]), Some(75.0));
        assert_eq!(median(&[70, 71]), Some(70.5));
    }

    #[test]
    fn test_median_of_extreme_pair_does_not_overflow() {
        assert_eq!(median(&[i32::MAX, i32::MAX]), Some(f64::from(i32::MAX)));
    }

    #[test]
    fn test_sort() {
        let mut scores = ScoreList::from(vec![95, 72, 85, 72]);
        scores.sort();
        assert_eq!(scores.as_slice(), &[72, 72, 85, 95]);
    }

    #[test]
    fn test_compute_sorts_and_fills_all() {
        let mut scores: ScoreList = [95, 72, 85].into_iter().collect();
        let stats = Statistics::compute(&mut scores);

        assert_eq!(stats.average, Some(84.0));
        assert!(approx_eq(stats.standard_deviation.unwrap(), 133.0_f64.sqrt()));
        assert_eq!(stats.median, Some(85.0));
        assert_eq!(scores.as_slice(), &[72, 85, 95]);
    }

    #[test]
    fn test_compute_single_score() {
        let mut scores = ScoreList::from(vec![100]);
        let stats = Statistics::compute(&mut scores);
        assert_eq!(stats.average, Some(100.0));
        assert_eq!(stats.standard_deviation, None);
        assert_eq!(stats.median, Some(100.0));
    }

    #[test]
    fn test_compute_empty() {
        let stats = Statistics::compute(&mut ScoreList::new());
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_median_is_permutation_invariant() {
        let orders = [
            vec![55, 91, 78, 64, 83, 70],
            vec![91, 83, 78, 70, 64, 55],
            vec![70, 55, 83, 91, 64, 78],
        ];
        let medians: Vec<Option<f64>> = orders
            .into_iter()
            .map(|order| Statistics::compute(&mut ScoreList::from(order)).median)
            .collect();
        assert!(medians.iter().all(|m| *m == Some(74.0)));
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(84.25), 84.3);
        assert_eq!(round_one_decimal(84.24), 84.2);
        assert_eq!(round_one_decimal(-2.25), -2.3);
        assert_eq!(format!("{:.1}", round_one_decimal(133.0_f64.sqrt())), "11.5");
    }
}
