use dioxus::prelude::*;

use crate::{i18n, t};

#[component]
pub fn SuccessNotice() -> Element {
    let _lang = i18n::use_locale();
    rsx! {
        div { class: "success-message", role: "status",
            h3 { {t!("success-title")} }
            p { {t!("success-body")} }
        }
    }
}

/// Blocking alert: the backdrop swallows clicks until the user confirms.
#[component]
pub fn ValidationAlert(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div {
                class: "modal",
                role: "alertdialog",
                aria_modal: "true",
                aria_labelledby: "alert-title",
                h3 { id: "alert-title", class: "modal__title", {t!("alert-title")} }
                p { class: "modal__message", "{message}" }
                div { class: "modal__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        autofocus: true,
                        onclick: move |_| on_close.call(()),
                        {t!("alert-dismiss")}
                    }
                }
            }
        }
    }
}
