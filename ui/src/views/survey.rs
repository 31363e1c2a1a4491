use dioxus::prelude::*;

use crate::survey::SurveyView;
use crate::{i18n, t};

#[component]
pub fn Survey() -> Element {
    let _lang = i18n::use_locale();

    rsx! {
        section { class: "page page-survey",
            h1 { {t!("page-survey-title")} }
            p { class: "page__intro", {t!("page-survey-intro")} }

            SurveyView {}
        }
    }
}
