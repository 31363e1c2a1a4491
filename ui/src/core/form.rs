//! Survey form state machine.
//!
//! `SurveyForm` owns everything the patient has entered so far: the
//! [`ResponseMap`] plus the identity, date and comment fields. Components
//! keep one in a signal and only mutate it through the methods below.
//!
//! Phases:
//! - `Incomplete { answered, total }` while questions remain unanswered.
//! - `Complete { total }` once every question has an answer.
//! - `Submitting` between a successful [`SurveyForm::begin_submit`] and
//!   [`SurveyForm::finish_submit`], which resets back to `Incomplete`.
//!
//! `begin_submit` refuses to leave `Incomplete`, so the only way into
//! `Submitting` is from `Complete`.

use std::sync::Arc;

use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use uuid::Uuid;

use super::error::SurveyError;
use super::progress::Progress;
use super::responses::ResponseMap;
use super::schema::SurveySchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyPhase {
    Incomplete { answered: usize, total: usize },
    Complete { total: usize },
    Submitting,
}

/// Identity, stay dates and comments typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientDetails {
    pub name: String,
    pub anonymous: bool,
    pub admission_date: String,
    pub discharge_date: String,
    pub comments: String,
}

impl PatientDetails {
    pub fn has_identity(&self) -> bool {
        self.anonymous || !self.name.trim().is_empty()
    }

    pub fn has_dates(&self) -> bool {
        !self.admission_date.trim().is_empty() && !self.discharge_date.trim().is_empty()
    }
}

/// Snapshot handed out when validation passes. Nothing persists it; the
/// survey view logs it and lets it drop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    pub anonymous: bool,
    pub admission_date: String,
    pub discharge_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub answers: ResponseMap,
    pub submitted_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurveyForm {
    schema: Arc<SurveySchema>,
    responses: ResponseMap,
    patient: PatientDetails,
    submitting: bool,
}

impl SurveyForm {
    pub fn new(schema: Arc<SurveySchema>) -> Self {
        Self {
            schema,
            responses: ResponseMap::new(),
            patient: PatientDetails::default(),
            submitting: false,
        }
    }

    /// Form over the built-in hospital questionnaire.
    pub fn hospital() -> Self {
        Self::new(SurveySchema::hospital())
    }

    pub fn schema(&self) -> &SurveySchema {
        &self.schema
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    pub fn patient(&self) -> &PatientDetails {
        &self.patient
    }

    pub fn selected(&self, question_id: &str) -> Option<&str> {
        self.responses.get(question_id)
    }

    /// Record (or replace) the answer to a question and return the new progress.
    ///
    /// Ids outside the schema and options the question doesn't offer are
    /// rejected, which keeps the map bounded by the question count.
    pub fn record_answer(&mut self, question_id: &str, option: &str) -> Result<Progress, SurveyError> {
        let question = self
            .schema
            .question(question_id)
            .ok_or_else(|| SurveyError::UnknownQuestion(question_id.to_string()))?;
        if !question.offers(option) {
            return Err(SurveyError::UnknownOption {
                question: question_id.to_string(),
                option: option.to_string(),
            });
        }

        self.responses.record(question_id, option);
        Ok(self.progress())
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.responses.len(), self.schema.total_questions())
    }

    pub fn can_submit(&self) -> bool {
        self.progress().is_complete()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn phase(&self) -> SurveyPhase {
        let progress = self.progress();
        if self.submitting {
            SurveyPhase::Submitting
        } else if progress.is_complete() {
            SurveyPhase::Complete {
                total: progress.total,
            }
        } else {
            SurveyPhase::Incomplete {
                answered: progress.answered,
                total: progress.total,
            }
        }
    }

    pub fn set_patient_name(&mut self, name: impl Into<String>) {
        if !self.patient.anonymous {
            self.patient.name = name.into();
        }
    }

    /// Ticking "anonymous" clears the name; the field stays disabled until unticked.
    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.patient.anonymous = anonymous;
        if anonymous {
            self.patient.name.clear();
        }
    }

    pub fn set_admission_date(&mut self, date: impl Into<String>) {
        self.patient.admission_date = date.into();
    }

    pub fn set_discharge_date(&mut self, date: impl Into<String>) {
        self.patient.discharge_date = date.into();
    }

    pub fn set_comments(&mut self, comments: impl Into<String>) {
        self.patient.comments = comments.into();
    }

    /// Validate and enter `Submitting`. On error nothing changes.
    pub fn begin_submit(&mut self) -> Result<Submission, SurveyError> {
        if self.submitting {
            return Err(SurveyError::AlreadySubmitting);
        }
        if !self.patient.has_identity() {
            return Err(SurveyError::MissingIdentity);
        }
        if !self.patient.has_dates() {
            return Err(SurveyError::MissingDates);
        }
        let progress = self.progress();
        if !progress.is_complete() {
            return Err(SurveyError::Incomplete {
                answered: progress.answered,
                total: progress.total,
            });
        }

        self.submitting = true;
        Ok(self.snapshot())
    }

    /// Complete a simulated submission: clears answers and every field.
    pub fn finish_submit(&mut self) -> Progress {
        self.reset();
        self.progress()
    }

    pub fn reset(&mut self) {
        self.responses.clear();
        self.patient = PatientDetails::default();
        self.submitting = false;
    }

    fn snapshot(&self) -> Submission {
        let patient = &self.patient;
        let comments = patient.comments.trim();
        Submission {
            id: Uuid::new_v4(),
            patient_name: (!patient.anonymous).then(|| patient.name.trim().to_string()),
            anonymous: patient.anonymous,
            admission_date: patient.admission_date.clone(),
            discharge_date: patient.discharge_date.clone(),
            comments: (!comments.is_empty()).then(|| comments.to_string()),
            answers: self.responses.clone(),
            submitted_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(form: &mut SurveyForm) {
        let answers: Vec<(String, String)> = form
            .schema()
            .questions()
            .map(|q| (q.id.clone(), q.options[0].clone()))
            .collect();
        for (id, option) in answers {
            form.record_answer(&id, &option).unwrap();
        }
    }

    fn with_dates(form: &mut SurveyForm) {
        form.set_admission_date("2024-12-18");
        form.set_discharge_date("2024-12-23");
    }

    #[test]
    fn starts_incomplete_with_zero_answers() {
        let form = SurveyForm::hospital();
        assert_eq!(
            form.phase(),
            SurveyPhase::Incomplete {
                answered: 0,
                total: 10
            }
        );
        assert!(!form.can_submit());
    }

    #[test]
    fn record_answer_reports_progress() {
        let mut form = SurveyForm::hospital();
        form.record_answer("q1_1", "Satisfeito(a)").unwrap();
        form.record_answer("q1_2", "Sim").unwrap();
        let progress = form.record_answer("q5_1", "Em parte").unwrap();
        assert_eq!((progress.answered, progress.total), (3, 10));
        assert_eq!(progress.percentage, 30.0);
    }

    #[test]
    fn reselecting_same_question_keeps_count() {
        let mut form = SurveyForm::hospital();
        form.record_answer("q1_2", "Sim").unwrap();
        form.record_answer("q1_2", "Não").unwrap();
        form.record_answer("q1_2", "Não").unwrap();
        assert_eq!(form.progress().answered, 1);
        assert_eq!(form.selected("q1_2"), Some("Não"));
    }

    #[test]
    fn unknown_question_and_option_leave_map_untouched() {
        let mut form = SurveyForm::hospital();
        form.record_answer("q1_2", "Sim").unwrap();

        let err = form.record_answer("q9_9", "Sim").unwrap_err();
        assert_eq!(err, SurveyError::UnknownQuestion("q9_9".into()));

        let err = form.record_answer("q4_1", "Em parte").unwrap_err();
        assert!(matches!(err, SurveyError::UnknownOption { .. }));

        assert_eq!(form.responses().len(), 1);
    }

    #[test]
    fn complete_once_everything_answered() {
        let mut form = SurveyForm::hospital();
        answer_all(&mut form);
        assert_eq!(form.phase(), SurveyPhase::Complete { total: 10 });
        assert!(form.can_submit());
    }

    #[test]
    fn missing_identity_blocks_submit_without_mutation() {
        let mut form = SurveyForm::hospital();
        answer_all(&mut form);
        with_dates(&mut form);
        let before = form.clone();

        assert_eq!(form.begin_submit(), Err(SurveyError::MissingIdentity));
        assert_eq!(form, before);
        assert!(!form.is_submitting());
    }

    #[test]
    fn whitespace_name_is_not_an_identity() {
        let mut form = SurveyForm::hospital();
        answer_all(&mut form);
        with_dates(&mut form);
        form.set_patient_name("   ");
        assert_eq!(form.begin_submit(), Err(SurveyError::MissingIdentity));
    }

    #[test]
    fn missing_either_date_blocks_submit() {
        let mut form = SurveyForm::hospital();
        answer_all(&mut form);
        form.set_anonymous(true);
        form.set_admission_date("2024-12-18");
        assert_eq!(form.begin_submit(), Err(SurveyError::MissingDates));

        form.set_admission_date("");
        form.set_discharge_date("2024-12-23");
        assert_eq!(form.begin_submit(), Err(SurveyError::MissingDates));
    }

    #[test]
    fn incomplete_answers_block_submit() {
        let mut form = SurveyForm::hospital();
        form.set_patient_name("Maria S.");
        with_dates(&mut form);
        form.record_answer("q1_1", "Neutro(a)").unwrap();
        assert_eq!(
            form.begin_submit(),
            Err(SurveyError::Incomplete {
                answered: 1,
                total: 10
            })
        );
        assert_eq!(form.responses().len(), 1);
    }

    #[test]
    fn identity_is_checked_before_dates_and_answers() {
        let mut form = SurveyForm::hospital();
        assert_eq!(form.begin_submit(), Err(SurveyError::MissingIdentity));
        form.set_anonymous(true);
        assert_eq!(form.begin_submit(), Err(SurveyError::MissingDates));
    }

    #[test]
    fn anonymous_submission_round_trip() {
        let mut form = SurveyForm::hospital();
        answer_all(&mut form);
        with_dates(&mut form);
        form.set_anonymous(true);
        form.set_comments("  Equipe muito atenciosa.  ");

        let submission = form.begin_submit().expect("valid submission");
        assert!(submission.anonymous);
        assert_eq!(submission.patient_name, None);
        assert_eq!(submission.comments.as_deref(), Some("Equipe muito atenciosa."));
        assert_eq!(submission.answers.len(), 10);
        assert_eq!(form.phase(), SurveyPhase::Submitting);

        assert_eq!(form.begin_submit(), Err(SurveyError::AlreadySubmitting));

        let progress = form.finish_submit();
        assert_eq!(progress.answered, 0);
        assert!(form.responses().is_empty());
        assert!(!form.can_submit());
        assert_eq!(form.patient(), &PatientDetails::default());
        assert_eq!(
            form.phase(),
            SurveyPhase::Incomplete {
                answered: 0,
                total: 10
            }
        );
    }

    #[test]
    fn named_submission_trims_name_and_drops_blank_comments() {
        let mut form = SurveyForm::hospital();
        answer_all(&mut form);
        with_dates(&mut form);
        form.set_patient_name("  Ana L. ");
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.patient_name.as_deref(), Some("Ana L."));
        assert_eq!(submission.comments, None);
    }

    #[test]
    fn anonymous_clears_and_locks_name() {
        let mut form = SurveyForm::hospital();
        form.set_patient_name("João P.");
        form.set_anonymous(true);
        assert!(form.patient().name.is_empty());
        form.set_patient_name("ignored");
        assert!(form.patient().name.is_empty());
        form.set_anonymous(false);
        form.set_patient_name("João P.");
        assert_eq!(form.patient().name, "João P.");
    }

    #[test]
    fn submission_serializes_without_absent_fields() {
        let mut form = SurveyForm::hospital();
        answer_all(&mut form);
        with_dates(&mut form);
        form.set_anonymous(true);
        let json = serde_json::to_value(form.begin_submit().unwrap()).unwrap();
        assert!(json.get("patient_name").is_none());
        assert!(json.get("comments").is_none());
        assert_eq!(json["answers"]["q4_1"], "Sim");
    }
}
