//! Trainees and their assessment history.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::assessment::{Assessment, AssessmentKind};

/// A person undergoing assessment.
///
/// Owns an append-only list of assessments kept in insertion order.
/// Assessment names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainee {
    name: String,
    email: String,
    date_of_birth: NaiveDate,
    #[serde(default)]
    assessments: Vec<Assessment>,
}

impl Trainee {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self::with_assessments(name, email, date_of_birth, Vec::new())
    }

    pub fn with_assessments(
        name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        assessments: Vec<Assessment>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            date_of_birth,
            assessments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    /// Age in whole years as of today's local date.
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }

    /// Age in whole years as of `today`.
    ///
    /// One year is subtracted when `today`'s month/day falls before the
    /// birthday's month/day.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let dob = self.date_of_birth;
        let mut age = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        age
    }

    /// Append an assessment to the end of the history.
    pub fn add_assessment(&mut self, assessment: Assessment) {
        tracing::debug!(
            trainee = %self.name,
            assessment = assessment.name(),
            kind = %assessment.kind(),
            score = assessment.score(),
            "adding assessment"
        );
        self.assessments.push(assessment);
    }

    /// First assessment named exactly `name`, if any.
    pub fn assessment(&self, name: &str) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.name() == name)
    }

    /// All assessments of `kind`, in insertion order.
    pub fn assessments_of_kind(&self, kind: AssessmentKind) -> Vec<&Assessment> {
        self.assessments
            .iter()
            .filter(|a| a.kind() == kind)
            .collect()
    }
}
