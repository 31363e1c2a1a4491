use dioxus::prelude::*;

use crate::core::form::SurveyForm;
use crate::{i18n, t};

/// Identity, stay dates and comments. Fields lock while a submission is in flight.
#[component]
pub fn PatientFields(form: Signal<SurveyForm>) -> Element {
    let _lang = i18n::use_locale();
    let mut form = form;
    let snapshot = form();
    let patient = snapshot.patient().clone();
    let locked = snapshot.is_submitting();

    let name_placeholder = if patient.anonymous {
        t!("patient-anonymous-placeholder")
    } else {
        t!("patient-name-placeholder")
    };
    let comments_placeholder = t!("comments-placeholder");

    rsx! {
        section { class: "survey-card patient-info",
            h3 { class: "section-title", {t!("patient-section-title")} }

            div { class: "form-group",
                label { class: "form-label", r#for: "patient-name", {t!("patient-name-label")} }
                input {
                    id: "patient-name",
                    class: "form-control",
                    r#type: "text",
                    value: "{patient.name}",
                    placeholder: "{name_placeholder}",
                    disabled: patient.anonymous || locked,
                    oninput: move |evt| form.with_mut(|f| f.set_patient_name(evt.value())),
                }
            }

            label { class: "checkbox-label",
                input {
                    id: "anonymous-checkbox",
                    r#type: "checkbox",
                    checked: patient.anonymous,
                    disabled: locked,
                    onchange: move |evt| form.with_mut(|f| f.set_anonymous(evt.checked())),
                }
                span { {t!("patient-anonymous-label")} }
            }

            div { class: "form-row",
                div { class: "form-group",
                    label { class: "form-label", r#for: "admission-date", {t!("admission-date-label")} }
                    input {
                        id: "admission-date",
                        class: "form-control",
                        r#type: "date",
                        value: "{patient.admission_date}",
                        disabled: locked,
                        oninput: move |evt| form.with_mut(|f| f.set_admission_date(evt.value())),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "discharge-date", {t!("discharge-date-label")} }
                    input {
                        id: "discharge-date",
                        class: "form-control",
                        r#type: "date",
                        value: "{patient.discharge_date}",
                        disabled: locked,
                        oninput: move |evt| form.with_mut(|f| f.set_discharge_date(evt.value())),
                    }
                }
            }

            div { class: "form-group",
                label { class: "form-label", r#for: "comments", {t!("comments-label")} }
                textarea {
                    id: "comments",
                    class: "form-control",
                    rows: "4",
                    placeholder: "{comments_placeholder}",
                    value: "{patient.comments}",
                    disabled: locked,
                    oninput: move |evt| form.with_mut(|f| f.set_comments(evt.value())),
                }
            }
        }
    }
}
