use dioxus::prelude::*;

use crate::core::stats::SentimentStats;
use crate::core::timeline::{TimelinePoint, TimelineSeries};
use crate::dashboard::format_day_label;

// Sentiment palette shared by both charts and the legend dots.
pub(crate) const POSITIVE_COLOR: &str = "#48bb78";
pub(crate) const NEGATIVE_COLOR: &str = "#f56565";
pub(crate) const NEUTRAL_COLOR: &str = "#ed8936";

/// Presentation mode of the categorical chart. Proportional (pie) vs.
/// categorical bars; the underlying counts are identical.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    #[default]
    Pie,
    Bar,
}

#[component]
pub fn SentimentBreakdownChart(stats: SentimentStats, mode: Signal<ChartMode>) -> Element {
    let mut mode = mode;
    let current = mode();

    let entries = [
        ("Positive", stats.positive, POSITIVE_COLOR),
        ("Negative", stats.negative, NEGATIVE_COLOR),
        ("Neutral", stats.neutral, NEUTRAL_COLOR),
    ];

    let chart = match current {
        ChartMode::Pie => render_pie(&entries),
        ChartMode::Bar => render_bars(&entries),
    };

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "Sentiment Distribution" }
                div { class: "chart-toggle",
                    button {
                        r#type: "button",
                        class: format!(
                            "chart-btn {}",
                            if current == ChartMode::Pie { "chart-btn--active" } else { "" }
                        ),
                        onclick: move |_| mode.set(ChartMode::Pie),
                        "Pie"
                    }
                    button {
                        r#type: "button",
                        class: format!(
                            "chart-btn {}",
                            if current == ChartMode::Bar { "chart-btn--active" } else { "" }
                        ),
                        onclick: move |_| mode.set(ChartMode::Bar),
                        "Bar"
                    }
                }
            }

            if stats.total == 0 {
                p { class: "dashboard-card__placeholder", "No reviews to chart yet." }
            } else {
                {chart}
                {render_legend()}
            }
        }
    }
}

#[component]
pub fn SentimentTimelineChart(series: TimelineSeries) -> Element {
    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "Sentiment Over Time" }
            }

            if series.is_empty() {
                p { class: "dashboard-card__placeholder", "No reviews to chart yet." }
            } else {
                {render_timeline(&series)}
                {render_legend()}
            }
        }
    }
}

fn render_legend() -> Element {
    let items = [
        ("Positive", POSITIVE_COLOR),
        ("Negative", NEGATIVE_COLOR),
        ("Neutral", NEUTRAL_COLOR),
    ];
    rsx! {
        div { class: "chart-legend",
            for (label, color) in items.into_iter() {
                span { class: "chart-legend__item",
                    span { class: "chart-legend__dot", style: "background: {color}" }
                    "{label}"
                }
            }
        }
    }
}

// Pie geometry: unit fractions of a full turn, 12 o'clock start, clockwise.
const PIE_CENTER: f64 = 100.0;
const PIE_RADIUS: f64 = 80.0;

fn pie_point(turn: f64) -> (f64, f64) {
    let angle = turn * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (
        PIE_CENTER + PIE_RADIUS * angle.cos(),
        PIE_CENTER + PIE_RADIUS * angle.sin(),
    )
}

fn pie_slice_path(start_turn: f64, end_turn: f64) -> String {
    let (sx, sy) = pie_point(start_turn);
    let (ex, ey) = pie_point(end_turn);
    let large_arc = u8::from(end_turn - start_turn > 0.5);
    format!(
        "M{PIE_CENTER} {PIE_CENTER} L{sx:.2} {sy:.2} \
         A{PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 1 {ex:.2} {ey:.2} Z"
    )
}

fn render_pie(entries: &[(&'static str, usize, &'static str); 3]) -> Element {
    let total: usize = entries.iter().map(|(_, count, _)| count).sum();
    let nonzero: Vec<(usize, &'static str)> = entries
        .iter()
        .filter(|(_, count, _)| *count > 0)
        .map(|(_, count, color)| (*count, *color))
        .collect();

    // A single populated category fills the whole disc; the arc path
    // degenerates there, so draw a plain circle instead.
    if let [(_, color)] = nonzero[..] {
        return rsx! {
            svg { class: "chart-svg", view_box: "0 0 200 200",
                circle {
                    cx: "{PIE_CENTER}",
                    cy: "{PIE_CENTER}",
                    r: "{PIE_RADIUS}",
                    fill: "{color}",
                    stroke: "#ffffff",
                    stroke_width: "2",
                }
            }
        };
    }

    let mut cursor = 0.0f64;
    let mut slices: Vec<(String, &'static str)> = Vec::with_capacity(nonzero.len());
    for (count, color) in nonzero {
        let fraction = count as f64 / total as f64;
        slices.push((pie_slice_path(cursor, cursor + fraction), color));
        cursor += fraction;
    }

    rsx! {
        svg { class: "chart-svg", view_box: "0 0 200 200",
            for (path_d, color) in slices.into_iter() {
                path {
                    d: "{path_d}",
                    fill: "{color}",
                    stroke: "#ffffff",
                    stroke_width: "2",
                }
            }
        }
    }
}

// Bar geometry.
const BAR_WIDTH: f64 = 60.0;
const BAR_MAX_HEIGHT: f64 = 150.0;
const BAR_BASELINE: f64 = 185.0;

fn bar_height(count: usize, max: usize) -> f64 {
    if max == 0 {
        0.0
    } else {
        count as f64 / max as f64 * BAR_MAX_HEIGHT
    }
}

struct BarGeometry {
    x: f64,
    y: f64,
    height: f64,
    label_x: f64,
    label_y: f64,
    count: usize,
    color: &'static str,
}

fn render_bars(entries: &[(&'static str, usize, &'static str); 3]) -> Element {
    let max = entries.iter().map(|(_, count, _)| *count).max().unwrap_or(0);
    let bars: Vec<BarGeometry> = entries
        .iter()
        .enumerate()
        .map(|(index, (_, count, color))| {
            let x = 30.0 + index as f64 * 90.0;
            let height = bar_height(*count, max);
            BarGeometry {
                x,
                y: BAR_BASELINE - height,
                height,
                label_x: x + BAR_WIDTH / 2.0,
                label_y: BAR_BASELINE - height - 8.0,
                count: *count,
                color: *color,
            }
        })
        .collect();

    rsx! {
        svg { class: "chart-svg", view_box: "0 0 300 200",
            for bar in bars.into_iter() {
                rect {
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{BAR_WIDTH}",
                    height: "{bar.height}",
                    rx: "4",
                    fill: "{bar.color}",
                }
                text {
                    x: "{bar.label_x}",
                    y: "{bar.label_y}",
                    text_anchor: "middle",
                    class: "chart-svg__value",
                    "{bar.count}"
                }
            }
        }
    }
}

// Time-series geometry.
const PLOT_WIDTH: f64 = 640.0;
const PLOT_HEIGHT: f64 = 240.0;
const PLOT_PADDING: f64 = 36.0;
const PLOT_BASELINE: f64 = PLOT_HEIGHT - PLOT_PADDING;
const PLOT_RIGHT: f64 = PLOT_WIDTH - PLOT_PADDING;
const PLOT_LABEL_Y: f64 = PLOT_HEIGHT - 10.0;

fn plot_x(index: usize, len: usize) -> f64 {
    if len <= 1 {
        PLOT_WIDTH / 2.0
    } else {
        let span = PLOT_WIDTH - 2.0 * PLOT_PADDING;
        PLOT_PADDING + index as f64 / (len as f64 - 1.0) * span
    }
}

fn plot_y(count: u32, max_count: u32) -> f64 {
    let span = PLOT_HEIGHT - 2.0 * PLOT_PADDING;
    PLOT_HEIGHT - PLOT_PADDING - f64::from(count) / f64::from(max_count.max(1)) * span
}

fn polyline_points(points: &[TimelinePoint], max_count: u32) -> String {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            format!(
                "{:.1},{:.1}",
                plot_x(index, points.len()),
                plot_y(point.count, max_count)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_timeline(series: &TimelineSeries) -> Element {
    let max_count = series.max_count();
    let lines = [
        (polyline_points(&series.positive, max_count), POSITIVE_COLOR),
        (polyline_points(&series.negative, max_count), NEGATIVE_COLOR),
        (polyline_points(&series.neutral, max_count), NEUTRAL_COLOR),
    ];

    let day_count = series.positive.len();
    let labels: Vec<(f64, String)> = series
        .days()
        .enumerate()
        .map(|(index, day)| (plot_x(index, day_count), format_day_label(day)))
        .collect();

    let markers: Vec<(f64, f64, &'static str)> = [
        (&series.positive, POSITIVE_COLOR),
        (&series.negative, NEGATIVE_COLOR),
        (&series.neutral, NEUTRAL_COLOR),
    ]
    .into_iter()
    .flat_map(|(points, color)| {
        points.iter().enumerate().map(move |(index, point)| {
            (
                plot_x(index, points.len()),
                plot_y(point.count, max_count),
                color,
            )
        })
    })
    .collect();

    rsx! {
        svg { class: "chart-svg chart-svg--wide", view_box: "0 0 640 240",
            line {
                x1: "{PLOT_PADDING}",
                y1: "{PLOT_BASELINE}",
                x2: "{PLOT_RIGHT}",
                y2: "{PLOT_BASELINE}",
                class: "chart-svg__axis-line",
            }
            for (points, color) in lines.into_iter() {
                polyline {
                    points: "{points}",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: "2",
                }
            }
            for (cx, cy, color) in markers.into_iter() {
                circle { cx: "{cx}", cy: "{cy}", r: "3", fill: "{color}" }
            }
            for (x, label) in labels.into_iter() {
                text {
                    x: "{x}",
                    y: "{PLOT_LABEL_Y}",
                    text_anchor: "middle",
                    class: "chart-svg__axis",
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn quarter_slice_path_is_stable() {
        let path = pie_slice_path(0.0, 0.25);
        assert_eq!(path, "M100 100 L100.00 20.00 A80 80 0 0 1 180.00 100.00 Z");
    }

    #[test]
    fn majority_slice_sets_the_large_arc_flag() {
        let path = pie_slice_path(0.0, 0.75);
        assert!(path.contains("A80 80 0 1 1"));
        let minority = pie_slice_path(0.0, 0.4);
        assert!(minority.contains("A80 80 0 0 1"));
    }

    #[test]
    fn bar_heights_scale_against_the_max() {
        assert_eq!(bar_height(3, 3), BAR_MAX_HEIGHT);
        assert_eq!(bar_height(0, 3), 0.0);
        assert_eq!(bar_height(0, 0), 0.0);
    }

    #[test]
    fn polyline_spans_the_plot_left_to_right() {
        let points = vec![
            TimelinePoint { day: date!(2024 - 01 - 11), count: 0 },
            TimelinePoint { day: date!(2024 - 01 - 12), count: 2 },
            TimelinePoint { day: date!(2024 - 01 - 13), count: 1 },
        ];
        let encoded = polyline_points(&points, 2);
        let pairs: Vec<&str> = encoded.split(' ').collect();
        assert_eq!(pairs.len(), 3);

        let xs: Vec<f64> = pairs
            .iter()
            .map(|pair| pair.split(',').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(xs[0], PLOT_PADDING);
        assert_eq!(xs[2], PLOT_WIDTH - PLOT_PADDING);
        assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn plot_y_pins_zero_to_the_baseline_and_max_to_the_top() {
        assert_eq!(plot_y(0, 4), PLOT_HEIGHT - PLOT_PADDING);
        assert_eq!(plot_y(4, 4), PLOT_PADDING);
    }

    #[test]
    fn single_day_views_center_the_point() {
        assert_eq!(plot_x(0, 1), PLOT_WIDTH / 2.0);
    }
}
