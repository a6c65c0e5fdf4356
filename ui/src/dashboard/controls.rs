use dioxus::prelude::*;

use crate::core::browse::{SentimentFilter, SortOrder};
use crate::dashboard::DashboardState;

/// Filter and sort selects. Both axes recompute the active view and reset
/// the page window; sorting does not survive a later filter change.
#[component]
pub fn DashboardControls(state: Signal<DashboardState>) -> Element {
    let mut state = state;
    let filter_value = state.read().browser.filter().value();
    let sort_value = state.read().browser.sort().value();

    rsx! {
        div { class: "dashboard-controls",
            label { class: "dashboard-controls__field",
                span { class: "dashboard-controls__label", "Filter by sentiment" }
                select {
                    class: "dashboard-controls__select",
                    value: "{filter_value}",
                    onchange: move |evt| {
                        let criterion = SentimentFilter::from_value(&evt.value());
                        state.write().browser.apply_filter(criterion);
                    },
                    option { value: "all", "All Sentiments" }
                    option { value: "POSITIVE", "Positive" }
                    option { value: "NEGATIVE", "Negative" }
                    option { value: "NEUTRAL", "Neutral" }
                }
            }

            label { class: "dashboard-controls__field",
                span { class: "dashboard-controls__label", "Sort by" }
                select {
                    class: "dashboard-controls__select",
                    value: "{sort_value}",
                    onchange: move |evt| {
                        let criterion = SortOrder::from_value(&evt.value());
                        state.write().browser.apply_sort(criterion);
                    },
                    option { value: "none", "Original Order" }
                    option { value: "newest", "Newest First" }
                    option { value: "oldest", "Oldest First" }
                    option { value: "confidence", "Highest Confidence" }
                }
            }
        }
    }
}
