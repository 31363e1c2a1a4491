use dioxus::prelude::*;
use tracing::{info, warn};

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::seed::ResponseRecord;
use crate::core::status::classify;
use crate::{i18n, t};

pub const EXPORT_FILENAME: &str = "relatorio_satisfacao_pacientes.csv";
pub const JSON_EXPORT_FILENAME: &str = "relatorio_satisfacao_pacientes.json";
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";
pub const JSON_MIME: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn filename(self) -> &'static str {
        match self {
            ExportFormat::Csv => EXPORT_FILENAME,
            ExportFormat::Json => JSON_EXPORT_FILENAME,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_MIME,
            ExportFormat::Json => JSON_MIME,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(ExportFormat),
    Done(String),
    Error(String),
}

#[component]
pub fn DashboardExportPanel(records: Vec<ResponseRecord>) -> Element {
    let _lang = i18n::use_locale();
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(format) => Some((
            "dashboard-card__meta".to_string(),
            format!("{}…", t!("export-working", format = format.label())),
        )),
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let export_handler = |format: ExportFormat| {
        let export_records = records.clone();
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_: MouseEvent| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working(format));
            let export_records = export_records.clone();
            #[cfg(target_arch = "wasm32")]
            {
                platform::spawn_future(async move {
                    let outcome = perform_export(format, export_records).await;
                    apply_outcome(status_signal, format, outcome);
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(perform_export(format, export_records));
                apply_outcome(status_signal, format, outcome);
                busy_signal.set(false);
            }
        }
    };
    let csv_handler = export_handler(ExportFormat::Csv);
    let json_handler = export_handler(ExportFormat::Json);

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-card__header",
                h2 { {t!("export-title")} }
            }
            p { {t!("export-intro")} }

            div { class: "dashboard-export__actions",
                button {
                    id: "export-btn",
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: csv_handler,
                    {t!("export-button")}
                }
                button {
                    id: "export-json-btn",
                    r#type: "button",
                    class: "button",
                    disabled: busy(),
                    onclick: json_handler,
                    {t!("export-json-button")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn apply_outcome(
    mut status: Signal<ExportStatus>,
    format: ExportFormat,
    outcome: Result<String, String>,
) {
    match outcome {
        Ok(message) => {
            info!(file = format.filename(), "export finished");
            status.set(ExportStatus::Done(message));
        }
        Err(err) => {
            warn!(file = format.filename(), %err, "export failed");
            status.set(ExportStatus::Error(t!("export-failed", error = err)));
        }
    }
}

async fn perform_export(format: ExportFormat, records: Vec<ResponseRecord>) -> Result<String, String> {
    match format {
        ExportFormat::Csv => perform_csv_export(records).await,
        ExportFormat::Json => perform_json_export(records).await,
    }
}

async fn perform_csv_export(records: Vec<ResponseRecord>) -> Result<String, String> {
    let csv = build_csv(&records);
    let delivery = download_bytes(EXPORT_FILENAME, CSV_MIME, csv.into_bytes()).await?;
    Ok(delivery_message(ExportFormat::Csv, delivery))
}

async fn perform_json_export(records: Vec<ResponseRecord>) -> Result<String, String> {
    let json = build_json(&records)?;
    let delivery = download_bytes(JSON_EXPORT_FILENAME, JSON_MIME, json.into_bytes()).await?;
    Ok(delivery_message(ExportFormat::Json, delivery))
}

fn delivery_message(format: ExportFormat, delivery: Option<String>) -> String {
    match delivery {
        Some(path) => t!("export-done-saved", format = format.label(), path = path),
        None => t!("export-done-download", format = format.label()),
    }
}

/// Pretty-printed array of the records, field names as in the dashboard seed.
pub fn build_json(records: &[ResponseRecord]) -> Result<String, String> {
    serde_json::to_string_pretty(records).map_err(|err| err.to_string())
}

pub fn csv_header() -> [String; 6] {
    [
        t!("col-id"),
        t!("col-patient"),
        t!("col-date"),
        t!("col-section"),
        t!("col-score"),
        t!("col-status"),
    ]
}

/// Header plus one line per record, every field double-quoted.
///
/// Quotes inside a field are written as-is, so a patient name containing `"`
/// produces a malformed line.
pub fn build_csv(records: &[ResponseRecord]) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len() + 1);
    rows.push(csv_header().to_vec());

    for record in records {
        rows.push(vec![
            record.id.to_string(),
            record.patient.clone(),
            record.date.clone(),
            record.section.clone(),
            record.score.to_string(),
            classify(f64::from(record.score)).label(),
        ]);
    }

    rows.into_iter()
        .map(|row| {
            row.iter()
                .map(|field| quote(field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
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
        anchor.style().set_property("visibility", "hidden").ok();

        let body = document.body().ok_or("Missing body")?;
        body.append_child(&anchor).ok();
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
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("br", "Santa Clara", "SantaClara")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
