//! Error types for the survey form and for the embedded data files.
//!
//! [`SurveyError`] reaches the patient through [`SurveyError::user_message`];
//! [`SchemaError`] only fires while parsing the bundled JSON files.

use thiserror::Error;

/// Errors raised by the survey form. Every variant is a user-input problem:
/// the form is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("unknown question `{0}`")]
    UnknownQuestion(String),

    #[error("option `{option}` is not offered by question `{question}`")]
    UnknownOption { question: String, option: String },

    #[error("patient name is required unless the response is anonymous")]
    MissingIdentity,

    #[error("admission and discharge dates are required")]
    MissingDates,

    #[error("only {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

impl SurveyError {
    /// Localized message shown in the blocking alert.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownQuestion(_) | Self::UnknownOption { .. } => {
                crate::t!("error-invalid-answer")
            }
            Self::MissingIdentity => crate::t!("error-missing-identity"),
            Self::MissingDates => crate::t!("error-missing-dates"),
            Self::Incomplete { .. } => crate::t!("error-incomplete"),
            Self::AlreadySubmitting => crate::t!("error-already-submitting"),
        }
    }
}

/// Errors raised while loading an embedded survey schema or dashboard seed.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("schema defines no sections")]
    NoSections,

    #[error("section `{0}` has no questions")]
    EmptySection(String),

    #[error("question id `{0}` is defined more than once")]
    DuplicateQuestion(String),

    #[error("question `{question}` offers {count} options; expected 2 to 5")]
    OptionCount { question: String, count: usize },

    #[error("question `{question}` lists option `{option}` twice")]
    DuplicateOption { question: String, option: String },

    #[error("score {value} for `{context}` is outside 1 to 5")]
    ScoreOutOfRange { context: String, value: f64 },

    #[error("expected {expected} monthly trend values, found {found}")]
    TrendLength { expected: usize, found: usize },
}
