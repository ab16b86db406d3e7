use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of answer options every question carries.
pub const NUM_OPTIONS: usize = 4;

/// Number of questions in one administration of a quiz.
pub const QUESTIONS_PER_SET: usize = 5;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "question", alias = "prompt")]
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Why a question or question set was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question has an empty id")]
    EmptyId,

    #[error("question '{id}' has an empty prompt")]
    EmptyPrompt { id: String },

    #[error("question '{id}' has an empty option")]
    EmptyOption { id: String },

    #[error("question '{id}' repeats the option '{option}'")]
    DuplicateOption { id: String, option: String },

    #[error("question '{id}' has a correct answer that is not one of its options")]
    AnswerNotInOptions { id: String },

    #[error("expected 5 questions, got {0}")]
    WrongCount(usize),

    #[error("question id '{0}' appears more than once")]
    DuplicateId(String),
}

impl Question {
    /// Check the per-question invariants: non-empty id and prompt, four
    /// distinct non-empty options, and a correct answer taken from them.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.id.trim().is_empty() {
            return Err(QuestionError::EmptyId);
        }
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt {
                id: self.id.clone(),
            });
        }

        let mut seen = HashSet::with_capacity(NUM_OPTIONS);
        for option in &self.options {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption {
                    id: self.id.clone(),
                });
            }
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption {
                    id: self.id.clone(),
                    option: option.clone(),
                });
            }
        }

        if !self.is_correct(&self.correct_answer) {
            return Err(QuestionError::AnswerNotInOptions {
                id: self.id.clone(),
            });
        }

        Ok(())
    }

    /// Whether `answer` names an option and that option is the correct one.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer && self.options.iter().any(|o| o == answer)
    }
}

/// Exactly five valid questions with distinct ids.
///
/// The only way to obtain a `QuestionSet` is through [`QuestionSet::new`]
/// (or deserialization, which goes through it), so holders never need to
/// re-check the invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.len() != QUESTIONS_PER_SET {
            return Err(QuestionError::WrongCount(questions.len()));
        }

        let mut ids = HashSet::with_capacity(QUESTIONS_PER_SET);
        for question in &questions {
            question.validate()?;
            if !ids.insert(question.id.as_str()) {
                return Err(QuestionError::DuplicateId(question.id.clone()));
            }
        }

        Ok(Self(questions))
    }

    /// Wrap questions produced by code whose output is valid by
    /// construction (the generic synthesizer).
    pub(crate) fn from_generated(questions: Vec<Question>) -> Self {
        debug_assert_eq!(Self::new(questions.clone()).as_ref().err(), None);
        Self(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.0.iter().find(|q| q.id == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(|q| q.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.0.iter()
    }
}

impl TryFrom<Vec<Question>> for QuestionSet {
    type Error = QuestionError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<QuestionSet> for Vec<Question> {
    fn from(set: QuestionSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
pub(crate) fn sample_question(id: &str) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("Question {id}?"),
        options: [
            "Alpha".to_string(),
            "Beta".to_string(),
            "Gamma".to_string(),
            "Delta".to_string(),
        ],
        correct_answer: "Beta".to_string(),
        explanation: None,
    }
}
