//! Aggregate statistics derived from the active review view.

use super::review::{Review, Sentiment};

/// Display-ready counts and rounded percentages for one view of the
/// collection. Recomputed from scratch on every view change, never mutated
/// in place.
///
/// The three `*_percent` fields round independently, so they are not
/// guaranteed to sum to 100 (e.g. three equal categories give 33/33/33).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SentimentStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_percent: u32,
    pub negative_percent: u32,
    pub neutral_percent: u32,
    /// Mean classifier confidence as a rounded percentage; 0 for an empty view.
    pub avg_confidence: u32,
}

impl SentimentStats {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        let mut total = 0usize;
        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut neutral = 0usize;
        let mut confidence_sum = 0.0f64;

        for review in reviews {
            total += 1;
            confidence_sum += review.confidence;
            match review.sentiment {
                Sentiment::Positive => positive += 1,
                Sentiment::Negative => negative += 1,
                Sentiment::Neutral => neutral += 1,
            }
        }

        let avg_confidence = if total > 0 {
            (confidence_sum / total as f64 * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total,
            positive,
            negative,
            neutral,
            positive_percent: percent_of(positive, total),
            negative_percent: percent_of(negative, total),
            neutral_percent: percent_of(neutral, total),
            avg_confidence,
        }
    }
}

fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (count as f64 / total as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn review(sentiment: Sentiment, confidence: f64) -> Review {
        Review {
            text: "review body".into(),
            sentiment,
            confidence,
            date: datetime!(2024-01-15 10:30:00 UTC),
            source: "Test Source".into(),
        }
    }

    #[test]
    fn empty_view_yields_all_zeros() {
        let stats = SentimentStats::from_reviews(&[]);
        assert_eq!(stats, SentimentStats::empty());
    }

    #[test]
    fn counts_sum_to_total() {
        let reviews = vec![
            review(Sentiment::Positive, 0.9),
            review(Sentiment::Positive, 0.8),
            review(Sentiment::Negative, 0.7),
            review(Sentiment::Neutral, 0.6),
        ];
        let stats = SentimentStats::from_reviews(&reviews);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.positive + stats.negative + stats.neutral, stats.total);
    }

    #[test]
    fn percentages_round_independently_and_may_not_sum_to_100() {
        // One review per sentiment: each category is 33.3% and rounds to 33,
        // so the three percentages sum to 99, not 100. This pins the
        // independent-rounding behavior; a normalizing implementation would
        // fail here.
        let reviews = vec![
            review(Sentiment::Positive, 0.9),
            review(Sentiment::Negative, 0.9),
            review(Sentiment::Neutral, 0.9),
        ];
        let stats = SentimentStats::from_reviews(&reviews);
        assert_eq!(stats.positive_percent, 33);
        assert_eq!(stats.negative_percent, 33);
        assert_eq!(stats.neutral_percent, 33);
        assert_eq!(
            stats.positive_percent + stats.negative_percent + stats.neutral_percent,
            99
        );
    }

    #[test]
    fn average_confidence_rounds_the_mean() {
        let reviews = vec![
            review(Sentiment::Positive, 0.95),
            review(Sentiment::Positive, 0.92),
            review(Sentiment::Positive, 0.98),
            review(Sentiment::Negative, 0.78),
            review(Sentiment::Neutral, 0.89),
        ];
        let stats = SentimentStats::from_reviews(&reviews);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.positive, 3);
        assert_eq!(stats.negative, 1);
        assert_eq!(stats.neutral, 1);
        assert_eq!(stats.positive_percent, 60);
        assert_eq!(stats.negative_percent, 20);
        assert_eq!(stats.neutral_percent, 20);
        // mean = 0.904 -> 90.4 -> 90
        assert_eq!(stats.avg_confidence, 90);
    }
}
