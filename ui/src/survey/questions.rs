use dioxus::prelude::*;

use super::model::{OptionView, QuestionView, SectionView};

/// One survey section. `on_select` receives `(question_id, option_label)`.
#[component]
pub fn SectionCard(section: SectionView, on_select: EventHandler<(String, String)>) -> Element {
    let answered = section.answered();
    let total = section.total();

    rsx! {
        div { class: "survey-section",
            div { class: "survey-section__header",
                h3 { class: "section-title", "{section.title}" }
                span { class: "survey-section__meta", "{answered}/{total}" }
            }
            for question in section.questions.iter() {
                {render_question(question, on_select)}
            }
        }
    }
}

fn render_question(question: &QuestionView, on_select: EventHandler<(String, String)>) -> Element {
    let class = if question.is_answered() {
        "question question--answered"
    } else {
        "question"
    };

    rsx! {
        div { key: "{question.id}", class: "{class}",
            div { class: "question-text", "{question.text}" }
            div { class: "question-options", role: "radiogroup",
                for option in question.options.iter() {
                    {render_option(&question.id, option, on_select)}
                }
            }
        }
    }
}

fn render_option(
    question_id: &str,
    option: &OptionView,
    on_select: EventHandler<(String, String)>,
) -> Element {
    let question_id = question_id.to_string();
    let label = option.label.clone();
    let payload = (question_id.clone(), label.clone());
    let class = if option.selected {
        "option-label selected"
    } else {
        "option-label"
    };

    rsx! {
        label {
            key: "{question_id}-{label}",
            class: "{class}",
            "data-question": "{question_id}",
            "data-option": "{label}",
            input {
                r#type: "radio",
                name: "{question_id}",
                value: "{label}",
                checked: option.selected,
                onchange: move |_| on_select.call(payload.clone()),
            }
            div { class: "radio-button" }
            span { "{label}" }
        }
    }
}
