//! Survey schema: ordered sections of single-choice questions.
//!
//! The built-in hospital questionnaire is embedded from `data/survey.json`
//! and validated on first access. The schema never changes afterwards, so
//! it is shared behind an `Arc`.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::SchemaError;

const BUILTIN_SURVEY: &str = include_str!("../../data/survey.json");

/// Inclusive bounds on how many options a question may offer.
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 5;

static HOSPITAL: Lazy<Arc<SurveySchema>> = Lazy::new(|| {
    Arc::new(SurveySchema::from_json(BUILTIN_SURVEY).expect("embedded survey schema is valid"))
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySchema {
    sections: Vec<Section>,
}

impl SurveySchema {
    /// The embedded hospital questionnaire (10 questions in 5 sections).
    pub fn hospital() -> Arc<SurveySchema> {
        HOSPITAL.clone()
    }

    pub fn from_json(raw: &str) -> Result<Self, SchemaError> {
        let schema: SurveySchema = serde_json::from_str(raw)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn from_sections(sections: Vec<Section>) -> Result<Self, SchemaError> {
        let schema = Self { sections };
        schema.validate()?;
        Ok(schema)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| section.questions.iter())
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(|section| section.questions.len()).sum()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id == id)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.sections.is_empty() {
            return Err(SchemaError::NoSections);
        }

        let mut seen_ids = HashSet::new();
        for section in &self.sections {
            if section.questions.is_empty() {
                return Err(SchemaError::EmptySection(section.title.clone()));
            }

            for question in &section.questions {
                if !seen_ids.insert(question.id.as_str()) {
                    return Err(SchemaError::DuplicateQuestion(question.id.clone()));
                }

                let count = question.options.len();
                if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
                    return Err(SchemaError::OptionCount {
                        question: question.id.clone(),
                        count,
                    });
                }

                let mut seen_options = HashSet::new();
                for option in &question.options {
                    if !seen_options.insert(option.as_str()) {
                        return Err(SchemaError::DuplicateOption {
                            question: question.id.clone(),
                            option: option.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
