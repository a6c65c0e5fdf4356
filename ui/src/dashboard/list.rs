use dioxus::prelude::*;

use crate::core::{format, review::Review};
use crate::dashboard::{format_review_date, sentiment_class, sentiment_label, DashboardState};

#[component]
pub fn ReviewList(state: Signal<DashboardState>) -> Element {
    let mut state = state;
    let snapshot = state();
    let browser = &snapshot.browser;

    let cards: Vec<CardEntry> = browser.visible().map(CardEntry::from_review).collect();
    let shown = cards.len();
    let total = browser.view_len();
    let has_more = browser.has_more();
    let remaining = browser.remaining_count();

    rsx! {
        section { class: "dashboard-card review-list",
            div { class: "dashboard-card__header",
                h2 { "Recent Reviews" }
                if total > 0 {
                    span { class: "dashboard-card__meta", "{shown} of {total} shown" }
                }
            }

            if cards.is_empty() {
                div { class: "empty-state",
                    h3 { "No reviews found" }
                    p { "Try adjusting your filters to see more results." }
                }
            } else {
                div { class: "review-list__items",
                    for card in cards.into_iter() {
                        {render_card(card)}
                    }
                }
            }

            if has_more {
                button {
                    r#type: "button",
                    class: "button button--primary review-list__more",
                    onclick: move |_| state.write().browser.advance(),
                    "Load More Reviews ({remaining} remaining)"
                }
            }
        }
    }
}

/// Display projection of one review card.
#[derive(Clone)]
struct CardEntry {
    badge_label: &'static str,
    badge_class: &'static str,
    date: String,
    text: String,
    source: String,
    confidence: String,
}

impl CardEntry {
    fn from_review(review: &Review) -> Self {
        Self {
            badge_label: sentiment_label(review.sentiment),
            badge_class: sentiment_class(review.sentiment),
            date: format_review_date(review),
            text: review.text.clone(),
            source: review.source.clone(),
            confidence: format::format_confidence(review.confidence),
        }
    }
}

fn render_card(card: CardEntry) -> Element {
    rsx! {
        article { class: "review-card",
            div { class: "review-card__header",
                span { class: "sentiment-badge sentiment-badge--{card.badge_class}",
                    "{card.badge_label}"
                }
                span { class: "review-card__meta", "{card.date}" }
            }
            p { class: "review-card__text", "{card.text}" }
            div { class: "review-card__footer",
                span { "Source: {card.source}" }
                span { class: "review-card__confidence", "Confidence: {card.confidence}" }
            }
        }
    }
}
