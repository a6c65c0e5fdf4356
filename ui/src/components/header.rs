use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::dashboard::format_last_updated;

/// App chrome: title, tagline, and the stamp of the most recent data load.
#[component]
pub fn DashboardHeader(updated_at: OffsetDateTime) -> Element {
    let stamp = format_last_updated(updated_at);

    rsx! {
        header { class: "dashboard-header",
            div { class: "dashboard-header__titles",
                h1 { "Sentiment Analysis Dashboard" }
                p { class: "dashboard-header__tagline",
                    "Customer review sentiment at a glance."
                }
            }
            span { class: "dashboard-header__updated", "Last updated: {stamp}" }
        }
    }
}
