//! In-progress answers keyed by question id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One selected option per question. Selecting again for the same question
/// replaces the earlier answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMap {
    answers: BTreeMap<String, String>,
}

impl ResponseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the answer for `question_id`. Returns the previous answer, if any.
    pub fn record(&mut self, question_id: &str, option: &str) -> Option<String> {
        self.answers
            .insert(question_id.to_string(), option.to_string())
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers
            .iter()
            .map(|(question, option)| (question.as_str(), option.as_str()))
    }
}
