use dioxus::prelude::*;

use crate::core::progress::Progress;
use crate::i18n;

#[component]
pub fn ProgressPanel(progress: Progress) -> Element {
    let _lang = i18n::use_locale();
    let pct = progress.rounded_pct();
    let band = progress.band();
    let message_class = format!("progress__message {}", band.css_class());

    rsx! {
        section { class: "survey-card progress",
            div { class: "progress__track",
                div {
                    id: "progress-bar",
                    class: "progress__bar",
                    role: "progressbar",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    aria_valuenow: "{pct}",
                    style: "width: {pct}%",
                }
            }
            p { id: "progress-text", class: "progress__text", {progress.count_label()} }
            p { id: "progress-message", class: "{message_class}", {band.message()} }
        }
    }
}
