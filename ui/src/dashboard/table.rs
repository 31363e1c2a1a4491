use dioxus::prelude::*;

use super::ResponseRow;
use crate::{i18n, t};

#[component]
pub fn RecentResponsesTable(rows: Vec<ResponseRow>) -> Element {
    let _lang = i18n::use_locale();
    rsx! {
        section { class: "dashboard-card recent-responses",
            div { class: "dashboard-card__header",
                h2 { {t!("recent-title")} }
                if !rows.is_empty() {
                    span { class: "dashboard-card__meta", "{rows.len()}" }
                }
            }

            if rows.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("recent-empty")} }
            } else {
                div { class: "table-wrapper",
                    table { class: "responses-table",
                        thead {
                            tr {
                                th { {t!("col-patient")} }
                                th { {t!("col-date")} }
                                th { {t!("col-section")} }
                                th { {t!("col-score")} }
                                th { {t!("col-status")} }
                            }
                        }
                        tbody { id: "recent-responses-body",
                            for row in rows.iter() {
                                {render_row(row)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_row(row: &ResponseRow) -> Element {
    let status_class = format!("status {}", row.badge.class);

    rsx! {
        tr { key: "{row.id}",
            td { "{row.patient}" }
            td { "{row.date}" }
            td { "{row.section}" }
            td { "{row.score}" }
            td {
                span { class: "{status_class}", "{row.badge.label}" }
            }
        }
    }
}
