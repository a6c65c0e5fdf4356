use time::{macros::format_description, Date, OffsetDateTime};

use crate::core::review::{Review, Sentiment};

pub(crate) fn sentiment_label(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Positive",
        Sentiment::Negative => "Negative",
        Sentiment::Neutral => "Neutral",
    }
}

/// CSS modifier for the sentiment badge and stat tiles.
pub(crate) fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Negative => "negative",
        Sentiment::Neutral => "neutral",
    }
}

pub(crate) fn format_review_date(review: &Review) -> String {
    review
        .date
        .format(&format_description!(
            "[month repr:short] [day padding:none], [year]"
        ))
        .unwrap_or_else(|_| "—".to_string())
}

pub(crate) fn format_day_label(day: Date) -> String {
    day.format(&format_description!("[month repr:short] [day padding:none]"))
        .unwrap_or_else(|_| "—".to_string())
}

pub(crate) fn format_last_updated(stamp: OffsetDateTime) -> String {
    let date = stamp
        .format(&format_description!(
            "[month repr:short] [day padding:none], [year]"
        ))
        .unwrap_or_else(|_| "—".to_string());
    let clock = stamp
        .format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string());
    format!("{date} · {clock} UTC")
}
