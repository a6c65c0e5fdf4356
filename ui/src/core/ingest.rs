//! Ingestion edge for the upstream producer, plus the bundled sample set.
//!
//! The producer pushes whole collections at once; there is no partial update.
//! Payloads arrive either as the wrapped feed shape (`{"reviews": [...]}`)
//! or as a bare array of records.

use once_cell::sync::Lazy;
use serde::Deserialize;
use time::macros::datetime;

use super::review::{Review, Sentiment};

#[derive(Debug, Deserialize)]
struct ReviewFeed {
    reviews: Vec<Review>,
}

/// Decodes a producer payload. Individual record validation (confidence
/// range, sentiment labels) is the producer's contract; this only surfaces
/// JSON/shape errors.
pub fn parse_reviews(payload: &str) -> Result<Vec<Review>, serde_json::Error> {
    match serde_json::from_str::<ReviewFeed>(payload) {
        Ok(feed) => Ok(feed.reviews),
        Err(_) => serde_json::from_str::<Vec<Review>>(payload),
    }
}

/// Demo reviews the dashboard boots with until a producer replaces them.
static SAMPLE_REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        Review {
            text: "This product exceeded my expectations! The quality is outstanding and \
                   delivery was super fast. Highly recommend to anyone looking for reliability."
                .into(),
            sentiment: Sentiment::Positive,
            confidence: 0.95,
            date: datetime!(2024-01-15 10:30:00 UTC),
            source: "Amazon Product Reviews".into(),
        },
        Review {
            text: "Terrible experience. The item arrived damaged and customer service was \
                   unhelpful. Would not buy again."
                .into(),
            sentiment: Sentiment::Negative,
            confidence: 0.92,
            date: datetime!(2024-01-14 15:45:00 UTC),
            source: "Amazon Product Reviews".into(),
        },
        Review {
            text: "It's okay, nothing special. Does what it's supposed to do but doesn't \
                   stand out from competitors."
                .into(),
            sentiment: Sentiment::Neutral,
            confidence: 0.78,
            date: datetime!(2024-01-13 09:15:00 UTC),
            source: "Amazon Product Reviews".into(),
        },
        Review {
            text: "Amazing customer service! They went above and beyond to resolve my issue. \
                   The product quality is also top-notch."
                .into(),
            sentiment: Sentiment::Positive,
            confidence: 0.98,
            date: datetime!(2024-01-12 14:20:00 UTC),
            source: "Amazon Product Reviews".into(),
        },
        Review {
            text: "Waste of money. Poor build quality and doesn't work as advertised. Very \
                   disappointed with this purchase."
                .into(),
            sentiment: Sentiment::Negative,
            confidence: 0.89,
            date: datetime!(2024-01-11 11:30:00 UTC),
            source: "Amazon Product Reviews".into(),
        },
    ]
});

pub fn sample_reviews() -> Vec<Review> {
    SAMPLE_REVIEWS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_wrapped_feed_shape() {
        let payload = r#"{
            "reviews": [
                {
                    "text": "Great value.",
                    "sentiment": "POSITIVE",
                    "confidence": 0.91,
                    "date": "2024-02-03T08:00:00Z",
                    "source": "Trustpilot"
                }
            ]
        }"#;
        let reviews = parse_reviews(payload).expect("feed decodes");
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].sentiment, Sentiment::Positive);
        assert_eq!(reviews[0].source, "Trustpilot");
    }

    #[test]
    fn decodes_a_bare_array() {
        let payload = r#"[
            {
                "text": "Meh.",
                "sentiment": "NEUTRAL",
                "confidence": 0.55,
                "date": "2024-02-04T12:30:00Z",
                "source": "Trustpilot"
            }
        ]"#;
        let reviews = parse_reviews(payload).expect("array decodes");
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn rejects_unknown_sentiment_labels() {
        let payload = r#"[
            {
                "text": "??",
                "sentiment": "MIXED",
                "confidence": 0.5,
                "date": "2024-02-04T12:30:00Z",
                "source": "Trustpilot"
            }
        ]"#;
        assert!(parse_reviews(payload).is_err());
    }

    #[test]
    fn sample_set_matches_the_demo_shape() {
        let reviews = sample_reviews();
        assert_eq!(reviews.len(), 5);
        assert!(reviews
            .iter()
            .all(|review| (0.0..=1.0).contains(&review.confidence)));
    }
}
