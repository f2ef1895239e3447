//! Validation error types.
//!
//! Raised synchronously by the validating constructors in [`crate::model`]
//! and by [`crate::marking::Marking::generate_assessment`]. Nothing in this
//! crate recovers from them; callers pre-validate or propagate.

use thiserror::Error;

/// Errors raised when a value violates a model invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The type tag is not one of `multiple-choice`, `technical`, `presentation`.
    #[error(
        "assessment type is invalid: {0:?}, type must be one of [\"multiple-choice\", \"technical\", \"presentation\"]"
    )]
    UnknownAssessmentType(String),

    /// The score is outside the closed interval `[0, 100]` (or NaN).
    #[error("score must be between 0-100, got {0}")]
    ScoreOutOfRange(f64),
}

impl ValidationError {
    /// Returns `true` if this error was caused by an unrecognized type tag.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, ValidationError::UnknownAssessmentType(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ValidationError::UnknownAssessmentType("essay".into());
        assert!(err.to_string().contains("\"essay\""));
        assert!(err.is_unknown_type());

        let err = ValidationError::ScoreOutOfRange(101.5);
        assert!(err.to_string().contains("101.5"));
        assert!(!err.is_unknown_type());
    }
}
