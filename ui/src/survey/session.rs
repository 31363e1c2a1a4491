//! Event handling behind the survey page.
//!
//! [`apply_event`] is the whole state machine the view's coroutine runs: it
//! mutates the form and notice, and hands back the timed event to queue next.
//! Nothing here touches Dioxus, so the submit → reset → dismiss path runs in
//! plain tests.

use tracing::{debug, info, warn};

use crate::core::form::SurveyForm;
use crate::core::platform::Platform;
use crate::core::timing::Timings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyEvent {
    Answer { question: String, option: String },
    Submit,
    SubmitElapsed,
    DismissNotice { notice: u64 },
}

/// An event to deliver back to [`apply_event`] after `delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Followup {
    pub delay_ms: u64,
    pub event: SurveyEvent,
}

/// The success notice. Each showing gets a fresh id so a dismiss timer from
/// an earlier submission cannot hide a newer notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeState {
    visible: Option<u64>,
    seq: u64,
}

impl NoticeState {
    pub fn visible(&self) -> Option<u64> {
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible.is_some()
    }

    fn show(&mut self) -> u64 {
        self.seq = self.seq.wrapping_add(1);
        self.visible = Some(self.seq);
        self.seq
    }

    fn dismiss(&mut self, notice: u64) -> bool {
        if self.visible == Some(notice) {
            self.visible = None;
            true
        } else {
            false
        }
    }
}

pub fn apply_event(
    form: &mut SurveyForm,
    notice: &mut NoticeState,
    alert: &mut Option<String>,
    event: SurveyEvent,
    timings: &Timings,
) -> Option<Followup> {
    match event {
        SurveyEvent::Answer { question, option } => {
            match form.record_answer(&question, &option) {
                Ok(progress) => debug!(
                    question = %question,
                    answered = progress.answered,
                    total = progress.total,
                    "answer recorded"
                ),
                Err(err) => {
                    warn!(%err, "answer rejected");
                    *alert = Some(err.user_message());
                }
            }
            None
        }
        SurveyEvent::Submit => match form.begin_submit() {
            Ok(submission) => {
                info!(
                    id = %submission.id,
                    anonymous = submission.anonymous,
                    platform = Platform::current().label(),
                    "survey submitted"
                );
                match serde_json::to_string(&submission) {
                    Ok(payload) => debug!(%payload, "submission payload"),
                    Err(err) => warn!(%err, "failed to serialise submission"),
                }
                Some(Followup {
                    delay_ms: timings.submit_delay_ms,
                    event: SurveyEvent::SubmitElapsed,
                })
            }
            Err(err) => {
                info!(%err, "submission blocked by validation");
                *alert = Some(err.user_message());
                None
            }
        },
        SurveyEvent::SubmitElapsed => {
            form.finish_submit();
            let shown = notice.show();
            Some(Followup {
                delay_ms: timings.notice_dismiss_ms,
                event: SurveyEvent::DismissNotice { notice: shown },
            })
        }
        SurveyEvent::DismissNotice { notice: id } => {
            if !notice.dismiss(id) {
                debug!(notice = id, "stale dismiss ignored");
            }
            None
        }
    }
}
