use dioxus::prelude::*;

use crate::core::{format, stats::SentimentStats};

#[component]
pub fn SummaryTiles(stats: SentimentStats) -> Element {
    let confidence_meta = if stats.total > 0 {
        format!("{} avg confidence", format::format_percent(stats.avg_confidence))
    } else {
        "Waiting for reviews".to_string()
    };

    rsx! {
        div { class: "dashboard-stats",
            div { class: "dashboard-stat",
                span { class: "dashboard-stat__label", "Total Reviews" }
                strong { class: "dashboard-stat__value", "{stats.total}" }
                span { class: "dashboard-stat__meta", "{confidence_meta}" }
            }
            div { class: "dashboard-stat dashboard-stat--positive",
                span { class: "dashboard-stat__label", "Positive" }
                strong { class: "dashboard-stat__value", "{stats.positive}" }
                span { class: "dashboard-stat__meta",
                    "{format::format_percent(stats.positive_percent)}"
                }
            }
            div { class: "dashboard-stat dashboard-stat--negative",
                span { class: "dashboard-stat__label", "Negative" }
                strong { class: "dashboard-stat__value", "{stats.negative}" }
                span { class: "dashboard-stat__meta",
                    "{format::format_percent(stats.negative_percent)}"
                }
            }
            div { class: "dashboard-stat dashboard-stat--neutral",
                span { class: "dashboard-stat__label", "Neutral" }
                strong { class: "dashboard-stat__value", "{stats.neutral}" }
                span { class: "dashboard-stat__meta",
                    "{format::format_percent(stats.neutral_percent)}"
                }
            }
        }
    }
}
