//! Derived sentiment statistics for the active tweet list.
//!
//! Purely a function of the list; never stored as a source of truth. Views
//! recompute through `use_memo` whenever the list reference changes, so the
//! derivation always observes the fully-installed list before any chart
//! re-render.

use serde::Serialize;

use super::model::{Sentiment, Tweet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentStats {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
}

impl SentimentStats {
    pub fn from_tweets(tweets: &[Tweet]) -> Self {
        let positive = tweets
            .iter()
            .filter(|t| t.sentiment == Sentiment::Positive)
            .count();
        let negative = tweets
            .iter()
            .filter(|t| t.sentiment == Sentiment::Negative)
            .count();
        let neutral = tweets
            .iter()
            .filter(|t| t.sentiment == Sentiment::Neutral)
            .count();
        let total = tweets.len();

        Self {
            positive,
            negative,
            neutral,
            total,
            positive_percentage: percentage(positive, total),
            negative_percentage: percentage(negative, total),
            neutral_percentage: percentage(neutral, total),
        }
    }

    /// Overall tone: a class wins only with a strict majority; ties and empty
    /// lists read as neutral. Shared with the share-message generator.
    pub fn overall(&self) -> Sentiment {
        if self.positive_percentage > 50.0 {
            Sentiment::Positive
        } else if self.negative_percentage > 50.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Convenience for tests & share previews with known percentages.
    pub fn from_percentages(positive: f64, negative: f64, neutral: f64) -> Self {
        Self {
            positive_percentage: positive,
            negative_percentage: negative,
            neutral_percentage: neutral,
            ..Default::default()
        }
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::samples::sample_tweets;

    #[test]
    fn empty_list_yields_all_zero() {
        let stats = SentimentStats::from_tweets(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.positive_percentage, 0.0);
        assert_eq!(stats.negative_percentage, 0.0);
        assert_eq!(stats.neutral_percentage, 0.0);
        assert_eq!(stats.overall(), Sentiment::Neutral);
    }

    #[test]
    fn percentages_sum_to_one_hundred_when_nonempty() {
        let stats = SentimentStats::from_tweets(&sample_tweets());
        let sum =
            stats.positive_percentage + stats.negative_percentage + stats.neutral_percentage;
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn sample_set_splits_forty_forty_twenty() {
        let stats = SentimentStats::from_tweets(&sample_tweets());
        assert_eq!(stats.positive, 2);
        assert_eq!(stats.negative, 2);
        assert_eq!(stats.neutral, 1);
        assert!((stats.positive_percentage - 40.0).abs() < 1e-9);
        assert!((stats.negative_percentage - 40.0).abs() < 1e-9);
        assert!((stats.neutral_percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn overall_requires_strict_majority() {
        assert_eq!(
            SentimentStats::from_percentages(65.0, 20.0, 15.0).overall(),
            Sentiment::Positive
        );
        assert_eq!(
            SentimentStats::from_percentages(20.0, 65.0, 15.0).overall(),
            Sentiment::Negative
        );
        // A 50/50 tie defaults to neutral.
        assert_eq!(
            SentimentStats::from_percentages(50.0, 50.0, 0.0).overall(),
            Sentiment::Neutral
        );
    }
}
