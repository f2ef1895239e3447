//! Aggregate statistics over a trainee's assessments.

use serde::{Deserialize, Serialize};

use crate::model::{Assessment, AssessmentKind, Trainee};

/// Summary of a trainee's assessment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraineeSummary {
    /// Trainee name.
    pub name: String,
    /// Trainee email.
    pub email: String,
    /// Total number of assessments.
    pub assessment_count: usize,
    /// Per-kind statistics, in [`AssessmentKind::ALL`] order. Kinds with no
    /// assessments are omitted.
    pub per_kind: Vec<KindStats>,
    /// Mean raw score across all assessments.
    pub mean_score: Option<f64>,
    /// Mean weighted score across all assessments.
    pub mean_weighted_score: Option<f64>,
}

/// Statistics for one assessment kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindStats {
    pub kind: AssessmentKind,
    pub count: usize,
    pub mean_score: f64,
    pub mean_weighted_score: f64,
}

/// Compute a [`TraineeSummary`] from a trainee's current assessments.
pub fn summarize(trainee: &Trainee) -> TraineeSummary {
    let per_kind = AssessmentKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let of_kind = trainee.assessments_of_kind(kind);
            let count = of_kind.len();
            let mean_score = mean(of_kind.iter().map(|a| a.score()), count)?;
            let mean_weighted_score = mean(of_kind.iter().map(|a| a.calculate_score()), count)?;
            Some(KindStats {
                kind,
                count,
                mean_score,
                mean_weighted_score,
            })
        })
        .collect();

    let all = trainee.assessments();
    TraineeSummary {
        name: trainee.name().to_string(),
        email: trainee.email().to_string(),
        assessment_count: all.len(),
        per_kind,
        mean_score: mean(all.iter().map(Assessment::score), all.len()),
        mean_weighted_score: mean(all.iter().map(Assessment::calculate_score), all.len()),
    }
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(values.sum::<f64>() / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trainee() -> Trainee {
        Trainee::new(
            "Sigma",
            "trainee@sigmalabs.co.uk",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        )
    }

    #[test]
    fn empty_trainee() {
        let summary = summarize(&trainee());
        assert_eq!(summary.assessment_count, 0);
        assert!(summary.per_kind.is_empty());
        assert!(summary.mean_score.is_none());
        assert!(summary.mean_weighted_score.is_none());
    }

    #[test]
    fn per_kind_means() {
        let mut t = trainee();
        t.add_assessment(Assessment::multiple_choice("Python Basics", 90.0).unwrap());
        t.add_assessment(Assessment::technical("Python Data Structures", 60.0).unwrap());
        t.add_assessment(Assessment::multiple_choice("Python OOP", 30.0).unwrap());

        let summary = summarize(&t);
        assert_eq!(summary.name, "Sigma");
        assert_eq!(summary.assessment_count, 3);
        assert_eq!(summary.per_kind.len(), 2);

        let mc = &summary.per_kind[0];
        assert_eq!(mc.kind, AssessmentKind::MultipleChoice);
        assert_eq!(mc.count, 2);
        assert!((mc.mean_score - 60.0).abs() < 1e-9);
        assert!((mc.mean_weighted_score - 42.0).abs() < 1e-9);

        let tech = &summary.per_kind[1];
        assert_eq!(tech.kind, AssessmentKind::Technical);
        assert!((tech.mean_weighted_score - 60.0).abs() < 1e-9);

        assert!((summary.mean_score.unwrap() - 60.0).abs() < 1e-9);
        // (63 + 60 + 21) / 3
        assert!((summary.mean_weighted_score.unwrap() - 48.0).abs() < 1e-9);
    }
}
