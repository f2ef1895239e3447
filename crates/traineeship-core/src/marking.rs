//! Quiz marking.
//!
//! [`Marking`] borrows a [`Quiz`] for the duration of one marking operation,
//! turns the share of correct answers into an integer percentage, and builds
//! the assessment matching the quiz's type.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{Assessment, AssessmentKind, Quiz};

type Constructor = fn(String, f64) -> Result<Assessment, ValidationError>;

/// Scores a single quiz. Holds no state beyond the borrowed quiz.
#[derive(Debug, Clone, Copy)]
pub struct Marking<'a> {
    quiz: &'a Quiz,
}

impl<'a> Marking<'a> {
    pub fn new(quiz: &'a Quiz) -> Self {
        Self { quiz }
    }

    pub fn quiz(&self) -> &'a Quiz {
        self.quiz
    }

    /// Number of questions answered correctly.
    pub fn correct_count(&self) -> usize {
        self.quiz
            .questions()
            .iter()
            .filter(|q| q.is_correct())
            .count()
    }

    /// The mark as a whole percentage.
    ///
    /// An empty quiz marks as 0. Exact halves round to the even neighbour,
    /// so 1 of 8 gives 12 and 3 of 8 gives 38.
    pub fn mark(&self) -> u32 {
        self.tally().1
    }

    /// Mark the quiz and build the assessment its type calls for.
    ///
    /// Fails if the quiz's type tag is not a recognized assessment type.
    pub fn generate_assessment(&self) -> Result<Assessment, ValidationError> {
        let construct = constructor_for(self.quiz.kind()?);
        construct(self.quiz.name().to_string(), f64::from(self.mark()))
    }

    /// A flat record of this quiz's marking, for reports.
    pub fn outcome(&self) -> MarkedQuiz {
        let (correct, mark) = self.tally();
        let weighted_score = self
            .quiz
            .kind()
            .ok()
            .map(|kind| f64::from(mark) * kind.weight());
        MarkedQuiz {
            quiz: self.quiz.name().to_string(),
            type_tag: self.quiz.type_tag().to_string(),
            total_questions: self.quiz.questions().len(),
            correct,
            mark,
            weighted_score,
        }
    }

    /// Correct count and mark, computed in one pass.
    fn tally(&self) -> (usize, u32) {
        let total = self.quiz.questions().len();
        if total == 0 {
            return (0, 0);
        }
        let correct = self.correct_count();
        let mark = percentage_half_even(correct, total);
        tracing::debug!(
            quiz = self.quiz.name(),
            correct,
            total,
            mark,
            "marked quiz"
        );
        (correct, mark)
    }
}

fn constructor_for(kind: AssessmentKind) -> Constructor {
    match kind {
        AssessmentKind::MultipleChoice => {
            |name: String, score: f64| Assessment::multiple_choice(name, score)
        }
        AssessmentKind::Technical => |name: String, score: f64| Assessment::technical(name, score),
        AssessmentKind::Presentation => {
            |name: String, score: f64| Assessment::presentation(name, score)
        }
    }
}

/// `round(correct / total * 100)` with ties to even, in exact integer arithmetic.
fn percentage_half_even(correct: usize, total: usize) -> u32 {
    let scaled = correct * 100;
    let quotient = scaled / total;
    let remainder = scaled % total;
    let rounded = match (remainder * 2).cmp(&total) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + quotient % 2,
    };
    rounded as u32
}

/// Result of marking one quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkedQuiz {
    /// Quiz name; also the name of the generated assessment.
    pub quiz: String,
    /// The quiz's type tag as written.
    #[serde(rename = "type")]
    pub type_tag: String,
    pub total_questions: usize,
    pub correct: usize,
    /// Whole percentage, 0-100.
    pub mark: u32,
    /// Mark weighted by the quiz's kind; `None` when the tag is unrecognized.
    #[serde(default)]
    pub weighted_score: Option<f64>,
}

impl MarkedQuiz {
    /// Build the assessment this result stands for, without re-marking.
    ///
    /// Fails if the type tag is not a recognized assessment type.
    pub fn to_assessment(&self) -> Result<Assessment, ValidationError> {
        let construct = constructor_for(self.type_tag.parse()?);
        construct(self.quiz.clone(), f64::from(self.mark))
    }
}
