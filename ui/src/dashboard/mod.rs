mod summary;
pub use summary::SummaryTiles;

mod charts;
pub use charts::{ChartMode, SentimentBreakdownChart, SentimentTimelineChart};

mod controls;
pub use controls::DashboardControls;

mod list;
pub use list::ReviewList;

mod export;
pub use export::ExportPanel;

mod utils;
pub(crate) use utils::*;

use time::OffsetDateTime;

use crate::core::{browse::ReviewBrowser, ingest, review::Review};

/// Shared state for the dashboard view: the record store plus load metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub browser: ReviewBrowser,
    pub error: Option<String>,
    pub updated_at: OffsetDateTime,
}

impl DashboardState {
    /// Boots with the bundled sample set so the page renders before any
    /// producer is attached.
    pub fn load() -> Self {
        Self {
            browser: ReviewBrowser::new(ingest::sample_reviews()),
            error: None,
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    /// Ingestion interface: wholesale collection replacement. Resets filter,
    /// sort, and pagination, and refreshes the last-updated stamp.
    pub fn load_reviews(&mut self, records: Vec<Review>) {
        self.browser.replace_collection(records);
        self.error = None;
        self.updated_at = OffsetDateTime::now_utc();
    }

    /// JSON edge of the ingestion interface; decode failures leave the
    /// current collection untouched and surface as a banner message.
    pub fn inject_json(&mut self, payload: &str) {
        match ingest::parse_reviews(payload) {
            Ok(records) => self.load_reviews(records),
            Err(err) => self.error = Some(format!("Couldn't load reviews: {err}")),
        }
    }
}
