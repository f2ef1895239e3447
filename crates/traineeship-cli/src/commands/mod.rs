pub mod init;
pub mod mark;
pub mod summary;
pub mod validate;

use comfy_table::{Cell, Table};
use traineeship_core::model::Trainee;
use traineeship_core::statistics::TraineeSummary;

/// Render a trainee's assessments as a table.
pub(crate) fn assessments_table(trainee: &Trainee) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Assessment", "Type", "Score", "Weighted"]);
    for a in trainee.assessments() {
        table.add_row(vec![
            Cell::new(a.name()),
            Cell::new(a.kind()),
            Cell::new(format!("{:.1}", a.score())),
            Cell::new(format!("{:.1}", a.calculate_score())),
        ]);
    }
    table
}

/// Render per-kind statistics as a table.
pub(crate) fn summary_table(summary: &TraineeSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Type", "Count", "Mean Score", "Mean Weighted"]);
    for stats in &summary.per_kind {
        table.add_row(vec![
            Cell::new(stats.kind),
            Cell::new(stats.count),
            Cell::new(format!("{:.1}", stats.mean_score)),
            Cell::new(format!("{:.1}", stats.mean_weighted_score)),
        ]);
    }
    if let (Some(mean), Some(weighted)) = (summary.mean_score, summary.mean_weighted_score) {
        table.add_row(vec![
            Cell::new("all"),
            Cell::new(summary.assessment_count),
            Cell::new(format!("{mean:.1}")),
            Cell::new(format!("{weighted:.1}")),
        ]);
    }
    table
}
