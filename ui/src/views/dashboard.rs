use dioxus::prelude::*;

use crate::components::DashboardHeader;
use crate::core::review::Review;
use crate::core::stats::SentimentStats;
use crate::core::timeline::TimelineSeries;
use crate::dashboard::{
    ChartMode, DashboardControls, DashboardState, ExportPanel, ReviewList,
    SentimentBreakdownChart, SentimentTimelineChart, SummaryTiles,
};

/// The single dashboard page. Owns the state signals and rederives all
/// display data from the active view on every state change; components below
/// this view never reach into the record store themselves.
#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(DashboardState::load);
    let chart_mode = use_signal(ChartMode::default);

    let snapshot = state();
    let stats = SentimentStats::from_reviews(snapshot.browser.view());
    let timeline = TimelineSeries::from_reviews(snapshot.browser.view());
    let view_records: Vec<Review> = snapshot.browser.view().cloned().collect();

    rsx! {
        section { class: "page page-dashboard",
            DashboardHeader { updated_at: snapshot.updated_at }

            if let Some(error) = snapshot.error.as_ref() {
                p { class: "dashboard-banner dashboard-banner--error", "{error}" }
            }

            SummaryTiles { stats }

            div { class: "dashboard__charts",
                SentimentBreakdownChart { stats, mode: chart_mode }
                SentimentTimelineChart { series: timeline }
            }

            DashboardControls { state }
            ReviewList { state }
            ExportPanel { records: view_records }
        }
    }
}
