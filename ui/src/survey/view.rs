use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::form::SurveyForm;
use crate::core::platform;
use crate::core::timing::{self, Timings};
use crate::{i18n, t};

use super::model::section_views;
use super::session::{apply_event, Followup, NoticeState, SurveyEvent};
use super::{PatientFields, ProgressPanel, SectionCard, SuccessNotice, ValidationAlert};

#[component]
pub fn SurveyView() -> Element {
    let _lang = i18n::use_locale();
    let timings = try_use_context::<Timings>().unwrap_or_default();
    let form = use_signal(SurveyForm::hospital);
    let notice = use_signal(NoticeState::default);
    let mut alert = use_signal(|| Option::<String>::None);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<SurveyEvent>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<SurveyEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut form_signal = form;
        let mut notice_signal = notice;
        let mut alert_signal = alert;

        async move {
            while let Some(event) = rx.next().await {
                let followup = apply_event(
                    &mut form_signal.write(),
                    &mut notice_signal.write(),
                    &mut alert_signal.write(),
                    event,
                    &timings,
                );
                if let Some(followup) = followup {
                    queue_event(sender_slot.clone(), followup);
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    let snapshot = form();
    let progress = snapshot.progress();
    let sections = section_views(&snapshot);
    let submitting = snapshot.is_submitting();
    let submit_enabled = snapshot.can_submit() && !submitting;
    let submit_class = if submit_enabled {
        "button button--primary survey-submit"
    } else {
        "button button--primary survey-submit button--disabled"
    };
    let submit_label = if submitting {
        t!("submit-button-busy")
    } else {
        t!("submit-button")
    };

    rsx! {
        article { class: "survey-container",
            if notice.read().is_visible() {
                SuccessNotice {}
            }

            ProgressPanel { progress }

            div { id: "survey-sections", class: "survey-sections",
                for section in sections.into_iter() {
                    SectionCard {
                        key: "{section.title}",
                        section,
                        on_select: move |(question, option): (String, String)| {
                            coroutine.send(SurveyEvent::Answer { question, option });
                        },
                    }
                }
            }

            PatientFields { form }

            div { class: "survey-actions",
                button {
                    id: "submit-btn",
                    r#type: "button",
                    class: "{submit_class}",
                    disabled: !submit_enabled,
                    onclick: move |_| coroutine.send(SurveyEvent::Submit),
                    "{submit_label}"
                }
            }

            if let Some(message) = alert() {
                ValidationAlert {
                    message,
                    on_close: move |_| alert.set(None),
                }
            }
        }
    }
}

fn queue_event(
    sender_slot: Rc<RefCell<Option<UnboundedSender<SurveyEvent>>>>,
    followup: Followup,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(followup.delay_ms).await;
            let _ = sender.unbounded_send(followup.event);
        });
    }
}
