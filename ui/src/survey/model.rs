//! Schema + answers → render-ready view models.

use crate::core::form::SurveyForm;

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    pub fn is_answered(&self) -> bool {
        self.options.iter().any(|option| option.selected)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub title: String,
    pub questions: Vec<QuestionView>,
}

impl SectionView {
    pub fn answered(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

pub fn section_views(form: &SurveyForm) -> Vec<SectionView> {
    form.schema()
        .sections()
        .iter()
        .map(|section| SectionView {
            title: section.title.clone(),
            questions: section
                .questions
                .iter()
                .map(|question| {
                    let selected = form.selected(&question.id);
                    QuestionView {
                        id: question.id.clone(),
                        text: question.text.clone(),
                        options: question
                            .options
                            .iter()
                            .map(|label| OptionView {
                                label: label.clone(),
                                selected: selected == Some(label.as_str()),
                            })
                            .collect(),
                    }
                })
                .collect(),
        })
        .collect()
}
