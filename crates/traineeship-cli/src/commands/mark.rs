//! The `traineeship mark` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use traineeship_core::marking::{MarkedQuiz, Marking};
use traineeship_core::parser;
use traineeship_core::report::MarkingReport;
use traineeship_core::statistics::summarize;

use crate::config::TraineeshipConfig;

pub fn execute(
    config: &TraineeshipConfig,
    quiz_path: Option<PathBuf>,
    trainee_path: Option<PathBuf>,
    output: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let quiz_path = quiz_path.unwrap_or_else(|| config.quiz_dir.clone());
    let quizzes = parser::load_quizzes(&quiz_path)?;
    anyhow::ensure!(
        !quizzes.is_empty(),
        "no quizzes found in {}",
        quiz_path.display()
    );

    let mut trainee = trainee_path
        .as_deref()
        .map(parser::parse_trainee)
        .transpose()?;

    let mut results = Vec::with_capacity(quizzes.len());
    for quiz in &quizzes {
        let outcome = Marking::new(quiz).outcome();

        match outcome.to_assessment() {
            Ok(assessment) => {
                if let Some(trainee) = trainee.as_mut() {
                    trainee.add_assessment(assessment);
                }
            }
            Err(e) => {
                eprintln!("Warning: {}: {e}", quiz.name());
            }
        }
        results.push(outcome);
    }

    println!("Marked {} quiz(zes)", results.len());
    println!("{}", results_table(&results));

    let mut report = MarkingReport::new(results);

    if let Some(trainee) = &trainee {
        let summary = summarize(trainee);
        println!(
            "\n{} <{}> now has {} assessment(s)",
            trainee.name(),
            trainee.email(),
            summary.assessment_count
        );
        println!("{}", super::summary_table(&summary));
        report = report.with_trainee(summary);
    }

    let output = if save {
        Some(config.output_dir.join(report.file_name()))
    } else {
        output
    };

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn results_table(results: &[MarkedQuiz]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Quiz", "Type", "Correct", "Mark", "Weighted"]);
    for r in results {
        let weighted = r
            .weighted_score
            .map(|w| format!("{w:.1}"))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&r.quiz),
            Cell::new(&r.type_tag),
            Cell::new(format!("{}/{}", r.correct, r.total_questions)),
            Cell::new(format!("{}%", r.mark)),
            Cell::new(weighted),
        ]);
    }
    table
}
