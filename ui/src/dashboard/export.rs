use dioxus::prelude::*;

use crate::core::review::{Review, Sentiment};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Exports the current active view (filtered/sorted, not just the visible
/// window) as JSON or CSV. Delivery is a browser download on wasm and a file
/// under the app data dir elsewhere.
#[component]
pub fn ExportPanel(records: Vec<Review>) -> Element {
    let total = records.len();
    let positive = records
        .iter()
        .filter(|r| r.sentiment == Sentiment::Positive)
        .count();
    let negative = records
        .iter()
        .filter(|r| r.sentiment == Sentiment::Negative)
        .count();
    let neutral = records
        .iter()
        .filter(|r| r.sentiment == Sentiment::Neutral)
        .count();

    let status = use_signal(|| ExportStatus::Idle);

    let json_handler = {
        let export_records = records.clone();
        let mut status_signal = status;
        move |_| match perform_json_export(&export_records) {
            Ok(message) => status_signal.set(ExportStatus::Done(message)),
            Err(err) => status_signal.set(ExportStatus::Error(err)),
        }
    };

    let csv_handler = {
        let export_records = records.clone();
        let mut status_signal = status;
        move |_| match perform_csv_export(&export_records) {
            Ok(message) => status_signal.set(ExportStatus::Done(message)),
            Err(err) => status_signal.set(ExportStatus::Error(err)),
        }
    };

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success",
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error",
            format!("⚠️ {err}"),
        )),
    };

    rsx! {
        section { class: "dashboard-card export-panel",
            div { class: "dashboard-card__header",
                h2 { "Export" }
            }

            if total == 0 {
                p { class: "dashboard-card__placeholder",
                    "Exports unlock once the current view has reviews."
                }
            } else {
                p { "Prepare tidy JSON or CSV of the current view for deeper analysis." }

                ul { class: "export-panel__summary",
                    li { strong { "{total}" } " reviews in view" }
                    li { strong { "{positive}" } " positive" }
                    li { strong { "{negative}" } " negative" }
                    li { strong { "{neutral}" } " neutral" }
                }

                div { class: "export-panel__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: json_handler,
                        "Export JSON"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: csv_handler,
                        "Export CSV"
                    }
                }

                if let Some((class_name, message)) = feedback {
                    p { class: "{class_name}", "{message}" }
                }
            }
        }
    }
}

fn perform_json_export(records: &[Review]) -> Result<String, String> {
    let json = serde_json::to_string_pretty(records).map_err(|err| err.to_string())?;
    let filename = format!("sentiview-reviews-{}.json", timestamp_slug());
    match deliver_text(&filename, "application/json", json)? {
        Some(path) => Ok(format!("JSON saved to {path}")),
        None => Ok("JSON download started".to_string()),
    }
}

fn perform_csv_export(records: &[Review]) -> Result<String, String> {
    let csv = build_csv(records);
    let filename = format!("sentiview-reviews-{}.csv", timestamp_slug());
    match deliver_text(&filename, "text/csv", csv)? {
        Some(path) => Ok(format!("CSV saved to {path}")),
        None => Ok("CSV download started".to_string()),
    }
}

fn build_csv(records: &[Review]) -> String {
    use time::format_description::well_known::Rfc3339;

    let mut csv = String::from("date,sentiment,confidence,source,text\n");
    for record in records {
        let date = record
            .date
            .format(&Rfc3339)
            .unwrap_or_else(|_| "—".to_string());
        let row = [
            date,
            sentiment_tag(record.sentiment).to_string(),
            record.confidence.to_string(),
            record.source.clone(),
            record.text.clone(),
        ];
        let line = row
            .into_iter()
            .map(|field| escape_csv(&field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn sentiment_tag(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "POSITIVE",
        Sentiment::Negative => "NEGATIVE",
        Sentiment::Neutral => "NEUTRAL",
    }
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

fn deliver_text(filename: &str, mime: &str, text: String) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&text));

        let mut opts = BlobPropertyBag::new();
        opts.type_(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.set_attribute("style", "display: none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(text.as_bytes()).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Sentiview", "Sentiview")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
