//! Calendar-day bucketing for the sentiment time-series chart.

use std::collections::BTreeMap;

use time::Date;

use super::review::{Review, Sentiment};

/// One plotted point: a calendar day and the number of matching reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePoint {
    pub day: Date,
    pub count: u32,
}

/// Per-sentiment day series sharing a common ascending day axis.
///
/// The axis contains exactly the distinct calendar days present in the input
/// view; a day with no reviews at all is never materialized, so gaps in the
/// data stay gaps. Every series carries an entry for every axis day (count 0
/// when that sentiment has none that day).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimelineSeries {
    pub positive: Vec<TimelinePoint>,
    pub negative: Vec<TimelinePoint>,
    pub neutral: Vec<TimelinePoint>,
}

#[derive(Debug, Default, Clone, Copy)]
struct DayCounts {
    positive: u32,
    negative: u32,
    neutral: u32,
}

impl TimelineSeries {
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        // BTreeMap keyed by day gives the ascending, duplicate-free axis.
        let mut days: BTreeMap<Date, DayCounts> = BTreeMap::new();
        for review in reviews {
            let slot = days.entry(review.date.date()).or_default();
            match review.sentiment {
                Sentiment::Positive => slot.positive += 1,
                Sentiment::Negative => slot.negative += 1,
                Sentiment::Neutral => slot.neutral += 1,
            }
        }

        let mut series = Self::default();
        for (day, counts) in days {
            series.positive.push(TimelinePoint {
                day,
                count: counts.positive,
            });
            series.negative.push(TimelinePoint {
                day,
                count: counts.negative,
            });
            series.neutral.push(TimelinePoint {
                day,
                count: counts.neutral,
            });
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
    }

    /// The shared day axis (taken from any series; all three are aligned).
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        self.positive.iter().map(|point| point.day)
    }

    /// Largest single-day count across all three series; 1 at minimum so
    /// chart scaling never divides by zero.
    pub fn max_count(&self) -> u32 {
        self.positive
            .iter()
            .chain(&self.negative)
            .chain(&self.neutral)
            .map(|point| point.count)
            .max()
            .unwrap_or(0)
            .max(1)
    }
}
