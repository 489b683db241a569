//! Aggregate statistics over the score column.

use rust_decimal::Decimal;

/// Aggregate statistics for a set of scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreStats {
    /// Number of scores aggregated.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Decimal,
    /// Population variance.
    pub variance: Decimal,
}

impl ScoreStats {
    /// Compute mean and population variance over the scores.
    ///
    /// Returns `None` for an empty input, where neither is defined.
    pub fn compute(scores: &[Decimal]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let count = Decimal::from(scores.len());
        let mean = scores.iter().copied().sum::<Decimal>() / count;
        let variance = scores
            .iter()
            .copied()
            .map(|s| {
                let d = s - mean;
                d * d
            })
            .sum::<Decimal>()
            / count;

        Some(Self {
            count: scores.len(),
            mean,
            variance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_input_has_no_stats() {
        assert_eq!(ScoreStats::compute(&[]), None);
    }

    #[test]
    fn single_score_has_zero_variance() {
        let stats = ScoreStats::compute(&[dec!(0.7)]).unwrap();

        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, dec!(0.7));
        assert_eq!(stats.variance, dec!(0.0));
    }

    #[test]
    fn small_slice_mean_and_variance() {
        let stats = ScoreStats::compute(&[dec!(0.1), dec!(0.2), dec!(0.3)]).unwrap();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, dec!(0.2));
        // ((0.01 + 0 + 0.01) / 3)
        assert_eq!(stats.variance.round_dp(10), dec!(0.0066666667));
    }

    #[test]
    fn full_dataset_stats_are_exact() {
        let scores: Vec<Decimal> = crate::dataset::build().iter().map(|r| r.score).collect();

        let stats = ScoreStats::compute(&scores).unwrap();

        assert_eq!(stats.count, 10_000);
        assert_eq!(stats.mean, dec!(0.45));
        assert_eq!(stats.variance, dec!(0.0825));
    }
}
