//! The review record shape shared with the upstream sentiment producer.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Sentiment label attached to a review by the upstream classifier.
///
/// Serialized in SCREAMING case (`"POSITIVE"`, …) to match the producer's
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// One ingested text review. Immutable once ingested; records carry no
/// identity field and are compared by value only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub sentiment: Sentiment,
    /// Classifier confidence in [0, 1]. Validation is the producer's job.
    pub confidence: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub source: String,
}
