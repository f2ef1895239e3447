//! Quizzes and their questions.

use serde::{Deserialize, Serialize};

use super::assessment::AssessmentKind;
use crate::error::ValidationError;

/// A single answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub chosen_answer: String,
    pub correct_answer: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        chosen_answer: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            chosen_answer: chosen_answer.into(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Exact comparison: case and whitespace both matter.
    pub fn is_correct(&self) -> bool {
        self.chosen_answer == self.correct_answer
    }
}

/// An ordered set of questions tagged with the assessment type it produces.
///
/// The tag is kept as given; it is only checked when the quiz is turned into
/// an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    name: String,
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(default)]
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            questions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Parse the type tag.
    pub fn kind(&self) -> Result<AssessmentKind, ValidationError> {
        self.type_tag.parse()
    }
}
