//! traineeship-core — Trainees, assessments, and quiz marking.
//!
//! This crate defines the data model, the marking logic that turns a quiz
//! into an assessment, and the TOML/JSON plumbing the CLI builds on.

pub mod error;
pub mod marking;
pub mod model;
pub mod parser;
pub mod report;
pub mod statistics;

pub use error::ValidationError;
pub use marking::{MarkedQuiz, Marking};
pub use model::{Assessment, AssessmentKind, Question, Quiz, Trainee};
