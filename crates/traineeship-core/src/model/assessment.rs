//! Assessments and their kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The three recognized assessment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    MultipleChoice,
    Technical,
    Presentation,
}

impl AssessmentKind {
    /// Every kind, in declaration order.
    pub const ALL: [AssessmentKind; 3] = [
        AssessmentKind::MultipleChoice,
        AssessmentKind::Technical,
        AssessmentKind::Presentation,
    ];

    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::MultipleChoice => "multiple-choice",
            AssessmentKind::Technical => "technical",
            AssessmentKind::Presentation => "presentation",
        }
    }

    /// Multiplier applied to a raw score by [`Assessment::calculate_score`].
    pub fn weight(&self) -> f64 {
        match self {
            AssessmentKind::MultipleChoice => 0.70,
            AssessmentKind::Technical => 1.00,
            AssessmentKind::Presentation => 0.60,
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssessmentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownAssessmentType(s.to_string()))
    }
}

/// A scored evaluation of a trainee.
///
/// Immutable once built. Every constructor checks that the score lies in
/// `[0, 100]`, and deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssessment")]
pub struct Assessment {
    name: String,
    #[serde(rename = "type")]
    kind: AssessmentKind,
    score: f64,
}

/// Unvalidated shape used when deserializing an [`Assessment`].
#[derive(Deserialize)]
struct RawAssessment {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    score: f64,
}

impl TryFrom<RawAssessment> for Assessment {
    type Error = ValidationError;

    fn try_from(raw: RawAssessment) -> Result<Self, Self::Error> {
        Assessment::new(raw.name, &raw.kind, raw.score)
    }
}

impl Assessment {
    /// Build an assessment from a type tag such as `"technical"`.
    pub fn new(
        name: impl Into<String>,
        type_tag: &str,
        score: f64,
    ) -> Result<Self, ValidationError> {
        let kind = type_tag.parse()?;
        Self::with_kind(name, kind, score)
    }

    /// Build an assessment of a known kind.
    pub fn with_kind(
        name: impl Into<String>,
        kind: AssessmentKind,
        score: f64,
    ) -> Result<Self, ValidationError> {
        // NaN fails the range check too.
        if !(0.0..=100.0).contains(&score) {
            return Err(ValidationError::ScoreOutOfRange(score));
        }
        Ok(Self {
            name: name.into(),
            kind,
            score,
        })
    }

    pub fn multiple_choice(name: impl Into<String>, score: f64) -> Result<Self, ValidationError> {
        Self::with_kind(name, AssessmentKind::MultipleChoice, score)
    }

    pub fn technical(name: impl Into<String>, score: f64) -> Result<Self, ValidationError> {
        Self::with_kind(name, AssessmentKind::Technical, score)
    }

    pub fn presentation(name: impl Into<String>, score: f64) -> Result<Self, ValidationError> {
        Self::with_kind(name, AssessmentKind::Presentation, score)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AssessmentKind {
        self.kind
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// The score weighted by this assessment's kind. Not stored.
    pub fn calculate_score(&self) -> f64 {
        self.score * self.kind.weight()
    }
}
