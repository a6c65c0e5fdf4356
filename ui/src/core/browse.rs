//! Record store plus the filter/sort/pagination state machine behind the
//! dashboard.
//!
//! The active view is kept as indices into the owned collection, so every
//! view element *is* a collection element rather than a copy, and recomputing
//! the view never touches the records themselves. Sorting produces a fresh
//! index order instead of reordering shared storage; a later filter change
//! therefore starts from collection order again (sort order does not persist
//! across filter changes).

use super::review::{Review, Sentiment};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filter axis of the view controller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Negative,
    Neutral,
}

impl SentimentFilter {
    pub fn matches(self, sentiment: Sentiment) -> bool {
        match self {
            Self::All => true,
            Self::Positive => sentiment == Sentiment::Positive,
            Self::Negative => sentiment == Sentiment::Negative,
            Self::Neutral => sentiment == Sentiment::Neutral,
        }
    }

    /// Control value as used by the filter `select`; unknown values fall back
    /// to `All`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            _ => Self::All,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

/// Sort axis of the view controller. Ties break arbitrarily.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    None,
    NewestFirst,
    OldestFirst,
    HighestConfidenceFirst,
}

impl SortOrder {
    pub fn from_value(value: &str) -> Self {
        match value {
            "newest" => Self::NewestFirst,
            "oldest" => Self::OldestFirst,
            "confidence" => Self::HighestConfidenceFirst,
            _ => Self::None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NewestFirst => "newest",
            Self::OldestFirst => "oldest",
            Self::HighestConfidenceFirst => "confidence",
        }
    }
}

/// Cumulative page window over the active view: each advance grows the
/// visible range, it never replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Pager {
    fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    fn reset(&mut self) {
        self.current_page = 0;
    }

    fn window_end(&self) -> usize {
        (self.current_page + 1) * self.page_size
    }

    fn visible_len(&self, view_len: usize) -> usize {
        view_len.min(self.window_end())
    }

    fn has_more(&self, view_len: usize) -> bool {
        self.window_end() < view_len
    }

    fn remaining(&self, view_len: usize) -> usize {
        view_len.saturating_sub(self.window_end())
    }

    fn advance(&mut self, view_len: usize) {
        if self.has_more(view_len) {
            self.current_page += 1;
        }
    }
}

/// Owns the full review collection and the derived active view.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewBrowser {
    collection: Vec<Review>,
    view: Vec<usize>,
    filter: SentimentFilter,
    sort: SortOrder,
    pager: Pager,
}

impl ReviewBrowser {
    pub fn new(records: Vec<Review>) -> Self {
        Self::with_page_size(records, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(records: Vec<Review>, page_size: usize) -> Self {
        let mut browser = Self {
            collection: records,
            view: Vec::new(),
            filter: SentimentFilter::All,
            sort: SortOrder::None,
            pager: Pager::new(page_size),
        };
        browser.rebuild_view();
        browser
    }

    /// Wholesale collection replacement: the old records are dropped, filter
    /// and sort reset, and the view and page window recomputed.
    pub fn replace_collection(&mut self, records: Vec<Review>) {
        self.collection = records;
        self.filter = SentimentFilter::All;
        self.sort = SortOrder::None;
        self.rebuild_view();
    }

    pub fn apply_filter(&mut self, criterion: SentimentFilter) {
        self.filter = criterion;
        // Filtering always starts from collection order; any previous sort is
        // gone, so stop advertising it.
        self.sort = SortOrder::None;
        self.rebuild_view();
    }

    pub fn apply_sort(&mut self, criterion: SortOrder) {
        self.sort = criterion;
        self.view = sorted_view(&self.view, &self.collection, criterion);
        self.pager.reset();
    }

    pub fn advance(&mut self) {
        self.pager.advance(self.view.len());
    }

    pub fn filter(&self) -> SentimentFilter {
        self.filter
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn collection_len(&self) -> usize {
        self.collection.len()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// The whole active view, in its current order.
    pub fn view(&self) -> impl Iterator<Item = &Review> + '_ {
        self.view.iter().map(|&index| &self.collection[index])
    }

    /// The cumulative visible window over the active view.
    pub fn visible(&self) -> impl Iterator<Item = &Review> + '_ {
        let shown = self.pager.visible_len(self.view.len());
        self.view[..shown].iter().map(|&index| &self.collection[index])
    }

    pub fn visible_len(&self) -> usize {
        self.pager.visible_len(self.view.len())
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more(self.view.len())
    }

    pub fn remaining_count(&self) -> usize {
        self.pager.remaining(self.view.len())
    }

    fn rebuild_view(&mut self) {
        self.view = self
            .collection
            .iter()
            .enumerate()
            .filter(|(_, review)| self.filter.matches(review.sentiment))
            .map(|(index, _)| index)
            .collect();
        self.pager.reset();
    }
}

/// Pure reordering of a view projection; the input order is left untouched.
fn sorted_view(view: &[usize], collection: &[Review], order: SortOrder) -> Vec<usize> {
    let mut next: Vec<usize> = view.to_vec();
    match order {
        SortOrder::None => {}
        SortOrder::NewestFirst => {
            next.sort_by(|&a, &b| collection[b].date.cmp(&collection[a].date));
        }
        SortOrder::OldestFirst => {
            next.sort_by(|&a, &b| collection[a].date.cmp(&collection[b].date));
        }
        SortOrder::HighestConfidenceFirst => {
            next.sort_by(|&a, &b| {
                collection[b]
                    .confidence
                    .total_cmp(&collection[a].confidence)
            });
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::OffsetDateTime;

    fn review(text: &str, sentiment: Sentiment, confidence: f64, date: OffsetDateTime) -> Review {
        Review {
            text: text.into(),
            sentiment,
            confidence,
            date,
            source: "Test Source".into(),
        }
    }

    fn fixture() -> Vec<Review> {
        vec![
            review("a", Sentiment::Positive, 0.95, datetime!(2024-01-15 10:30:00 UTC)),
            review("b", Sentiment::Negative, 0.92, datetime!(2024-01-14 15:45:00 UTC)),
            review("c", Sentiment::Neutral, 0.78, datetime!(2024-01-13 09:15:00 UTC)),
            review("d", Sentiment::Positive, 0.98, datetime!(2024-01-12 14:20:00 UTC)),
            review("e", Sentiment::Negative, 0.89, datetime!(2024-01-11 11:30:00 UTC)),
        ]
    }

    fn texts(browser: &ReviewBrowser) -> Vec<String> {
        browser.view().map(|r| r.text.to_string()).collect()
    }

    #[test]
    fn filter_keeps_collection_order() {
        let mut browser = ReviewBrowser::new(fixture());
        browser.apply_filter(SentimentFilter::Negative);
        assert_eq!(texts(&browser), ["b", "e"]);
    }

    #[test]
    fn zero_match_filter_propagates_cleanly() {
        let reviews = vec![review(
            "a",
            Sentiment::Positive,
            0.9,
            datetime!(2024-01-15 10:30:00 UTC),
        )];
        let mut browser = ReviewBrowser::new(reviews);
        browser.apply_filter(SentimentFilter::Neutral);
        assert_eq!(browser.view_len(), 0);
        assert_eq!(browser.visible_len(), 0);
        assert!(!browser.has_more());
        assert_eq!(browser.remaining_count(), 0);
    }

    #[test]
    fn newest_then_oldest_is_an_exact_reversal() {
        let mut browser = ReviewBrowser::new(fixture());
        browser.apply_sort(SortOrder::NewestFirst);
        let newest = texts(&browser);
        browser.apply_sort(SortOrder::OldestFirst);
        let mut oldest = texts(&browser);
        oldest.reverse();
        assert_eq!(newest, oldest);
        assert_eq!(newest, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn confidence_sort_is_descending() {
        let mut browser = ReviewBrowser::new(fixture());
        browser.apply_sort(SortOrder::HighestConfidenceFirst);
        assert_eq!(texts(&browser), ["d", "a", "b", "e", "c"]);
    }

    #[test]
    fn sort_does_not_survive_a_filter_change() {
        let mut browser = ReviewBrowser::new(fixture());
        browser.apply_sort(SortOrder::OldestFirst);
        browser.apply_filter(SentimentFilter::All);
        assert_eq!(browser.sort(), SortOrder::None);
        assert_eq!(texts(&browser), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn window_is_cumulative_and_advance_clamps() {
        let mut browser = ReviewBrowser::with_page_size(fixture(), 2);
        assert_eq!(browser.visible_len(), 2);
        assert!(browser.has_more());
        assert_eq!(browser.remaining_count(), 3);

        browser.advance();
        assert_eq!(browser.visible_len(), 4);
        assert_eq!(browser.remaining_count(), 1);

        browser.advance();
        assert_eq!(browser.visible_len(), 5);
        assert_eq!(browser.remaining_count(), 0);
        assert!(!browser.has_more());

        // Exhausted: further advances are no-ops.
        browser.advance();
        assert_eq!(browser.visible_len(), 5);
    }

    #[test]
    fn filter_and_sort_reset_the_window() {
        let mut browser = ReviewBrowser::with_page_size(fixture(), 2);
        browser.advance();
        assert_eq!(browser.visible_len(), 4);

        browser.apply_sort(SortOrder::NewestFirst);
        assert_eq!(browser.visible_len(), 2);

        browser.advance();
        browser.apply_filter(SentimentFilter::Positive);
        assert_eq!(browser.visible_len(), 2);
        assert!(!browser.has_more());
    }

    #[test]
    fn replace_collection_resets_everything() {
        let mut browser = ReviewBrowser::with_page_size(fixture(), 2);
        browser.apply_filter(SentimentFilter::Positive);
        browser.apply_sort(SortOrder::HighestConfidenceFirst);
        browser.advance();

        let next = vec![review(
            "z",
            Sentiment::Neutral,
            0.5,
            datetime!(2024-02-01 00:00:00 UTC),
        )];
        browser.replace_collection(next);
        assert_eq!(browser.collection_len(), 1);
        assert_eq!(browser.filter(), SentimentFilter::All);
        assert_eq!(browser.sort(), SortOrder::None);
        assert_eq!(texts(&browser), ["z"]);
        assert!(!browser.has_more());
    }
}
