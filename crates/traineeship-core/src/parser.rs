//! TOML quiz and trainee parser.
//!
//! Loads quizzes and trainees from TOML files and directories, and validates
//! quizzes for common authoring mistakes.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::model::{Assessment, AssessmentKind, Question, Quiz, Trainee};

/// Intermediate TOML structure for quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    name: String,
    #[serde(rename = "type")]
    type_tag: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    question: String,
    #[serde(default)]
    chosen_answer: String,
    correct_answer: String,
}

/// Intermediate TOML structure for trainee files.
#[derive(Debug, Deserialize)]
struct TomlTraineeFile {
    trainee: TomlTraineeHeader,
    #[serde(default)]
    assessments: Vec<TomlAssessment>,
}

#[derive(Debug, Deserialize)]
struct TomlTraineeHeader {
    name: String,
    email: String,
    date_of_birth: String,
}

#[derive(Debug, Deserialize)]
struct TomlAssessment {
    name: String,
    #[serde(rename = "type")]
    type_tag: String,
    score: f64,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
///
/// The type tag is not checked here; see [`validate_quiz`].
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question::new(q.question, q.chosen_answer, q.correct_answer))
        .collect();

    Ok(Quiz::new(parsed.quiz.name, parsed.quiz.type_tag, questions))
}

/// Recursively load all `.toml` quiz files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// Load one quiz file, or every quiz under a directory.
pub fn load_quizzes(path: &Path) -> Result<Vec<Quiz>> {
    if path.is_dir() {
        load_quiz_directory(path)
    } else {
        Ok(vec![parse_quiz(path)?])
    }
}

/// Parse a single TOML file into a `Trainee`.
pub fn parse_trainee(path: &Path) -> Result<Trainee> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trainee file: {}", path.display()))?;

    parse_trainee_str(&content, path)
}

/// Parse a TOML string into a `Trainee`. Every assessment is validated.
pub fn parse_trainee_str(content: &str, source_path: &Path) -> Result<Trainee> {
    let parsed: TomlTraineeFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let date_of_birth = NaiveDate::parse_from_str(&parsed.trainee.date_of_birth, "%Y-%m-%d")
        .with_context(|| {
            format!(
                "invalid date_of_birth {:?} (expected YYYY-MM-DD)",
                parsed.trainee.date_of_birth
            )
        })?;

    let assessments = parsed
        .assessments
        .into_iter()
        .map(|a| {
            let name = a.name.clone();
            Assessment::new(a.name, &a.type_tag, a.score)
                .with_context(|| format!("invalid assessment {name:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Trainee::with_assessments(
        parsed.trainee.name,
        parsed.trainee.email,
        date_of_birth,
        assessments,
    ))
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for common issues.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.type_tag().parse::<AssessmentKind>().is_err() {
        warnings.push(ValidationWarning {
            question: None,
            message: format!(
                "unknown quiz type {:?}; marking will not produce an assessment",
                quiz.type_tag()
            ),
        });
    }

    if quiz.questions().is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions and will always mark as 0".into(),
        });
    }

    let mut seen = HashSet::new();
    for (i, q) in quiz.questions().iter().enumerate() {
        let number = Some(i + 1);
        if q.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "question text is empty".into(),
            });
        } else if !seen.insert(q.question.as_str()) {
            warnings.push(ValidationWarning {
                question: number,
                message: format!("duplicate question: {}", q.question),
            });
        }
        if q.correct_answer.is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "correct_answer is empty".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MATHS_QUIZ: &str = r#"
[quiz]
name = "Maths Quiz"
type = "multiple-choice"

[[questions]]
question = "What is 1 + 1? A:2 B:4 C:5 D:8"
chosen_answer = "A"
correct_answer = "A"

[[questions]]
question = "What is 2 + 2? A:2 B:4 C:5 D:8"
chosen_answer = "B"
correct_answer = "B"

[[questions]]
question = "What is 3 + 3? A:2 B:4 C:6 D:8"
chosen_answer = "D"
correct_answer = "C"
"#;

    const SIGMA: &str = r#"
[trainee]
name = "Sigma"
email = "trainee@sigmalabs.co.uk"
date_of_birth = "1990-01-01"

[[assessments]]
name = "Python Basics"
type = "multiple-choice"
score = 90.1

[[assessments]]
name = "Python Data Structures"
type = "technical"
score = 67.4
"#;

    #[test]
    fn parse_valid_quiz() {
        let quiz = parse_quiz_str(MATHS_QUIZ, &PathBuf::from("maths.toml")).unwrap();
        assert_eq!(quiz.name(), "Maths Quiz");
        assert_eq!(quiz.kind().unwrap(), AssessmentKind::MultipleChoice);
        assert_eq!(quiz.questions().len(), 3);
        assert!(quiz.questions()[0].is_correct());
        assert!(!quiz.questions()[2].is_correct());
        assert!(validate_quiz(&quiz).is_empty());
    }

    #[test]
    fn missing_chosen_answer_counts_as_unanswered() {
        let toml = r#"
[quiz]
name = "Unanswered"
type = "technical"

[[questions]]
question = "Explain ownership"
correct_answer = "moves"
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("q.toml")).unwrap();
        assert_eq!(quiz.questions()[0].chosen_answer, "");
        assert!(!quiz.questions()[0].is_correct());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_quiz_str(bad, &PathBuf::from("bad.toml")).is_err());
        assert!(parse_trainee_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_reports_problems() {
        let toml = r#"
[quiz]
name = "Messy"
type = "essay"

[[questions]]
question = "Same"
chosen_answer = "A"
correct_answer = "A"

[[questions]]
question = "Same"
chosen_answer = "A"
correct_answer = ""

[[questions]]
question = "   "
chosen_answer = "A"
correct_answer = "A"
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("messy.toml")).unwrap();
        let warnings = validate_quiz(&quiz);
        assert!(warnings.iter().any(|w| w.message.contains("unknown quiz type")));
        assert!(warnings
            .iter()
            .any(|w| w.question == Some(2) && w.message.contains("duplicate")));
        assert!(warnings
            .iter()
            .any(|w| w.question == Some(2) && w.message.contains("correct_answer")));
        assert!(warnings
            .iter()
            .any(|w| w.question == Some(3) && w.message.contains("empty")));
    }

    #[test]
    fn validate_empty_quiz() {
        let quiz = Quiz::new("Empty", "technical", vec![]);
        let warnings = validate_quiz(&quiz);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no questions"));
    }

    #[test]
    fn parse_valid_trainee() {
        let trainee = parse_trainee_str(SIGMA, &PathBuf::from("sigma.toml")).unwrap();
        assert_eq!(trainee.name(), "Sigma");
        assert_eq!(
            trainee.date_of_birth(),
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
        assert_eq!(trainee.assessments().len(), 2);
        assert_eq!(
            trainee.assessment("Python Basics").unwrap().kind(),
            AssessmentKind::MultipleChoice
        );
    }

    #[test]
    fn trainee_with_invalid_assessment_fails() {
        let toml = r#"
[trainee]
name = "Sigma"
email = "trainee@sigmalabs.co.uk"
date_of_birth = "1990-01-01"

[[assessments]]
name = "Overachiever"
type = "technical"
score = 140
"#;
        let err = parse_trainee_str(toml, &PathBuf::from("t.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("Overachiever"));
    }

    #[test]
    fn trainee_with_bad_date_fails() {
        let toml = r#"
[trainee]
name = "Sigma"
email = "trainee@sigmalabs.co.uk"
date_of_birth = "01/01/1990"
"#;
        let err = parse_trainee_str(toml, &PathBuf::from("t.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("date_of_birth"));
    }

    #[test]
    fn load_directory_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("maths.toml"), MATHS_QUIZ).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not [toml").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let nested = dir.path().join("week2");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(
            nested.join("oop.toml"),
            MATHS_QUIZ.replace("Maths Quiz", "OOP Quiz"),
        )
        .unwrap();

        let quizzes = load_quiz_directory(dir.path()).unwrap();
        let names: Vec<&str> = quizzes.iter().map(|q| q.name()).collect();
        assert_eq!(names, vec!["Maths Quiz", "OOP Quiz"]);
    }

    #[test]
    fn load_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("maths.toml");
        std::fs::write(&file, MATHS_QUIZ).unwrap();
        assert!(load_quiz_directory(&file).is_err());
        assert_eq!(load_quizzes(&file).unwrap().len(), 1);
    }
}
