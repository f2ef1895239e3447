//! Core data model types for traineeship.
//!
//! Assessments, the trainees who own them, and the quizzes that are marked
//! to produce new assessments.

mod assessment;
mod quiz;
mod trainee;

pub use assessment::{Assessment, AssessmentKind};
pub use quiz::{Question, Quiz};
pub use trainee::Trainee;
