//! Formatting helpers for presenting derived statistics.

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

pub fn format_confidence(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}
