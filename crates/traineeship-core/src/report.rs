//! Marking report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::marking::MarkedQuiz;
use crate::statistics::TraineeSummary;

/// The outcome of one marking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkingReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The trainee the generated assessments were attached to, if any.
    #[serde(default)]
    pub trainee: Option<TraineeSummary>,
    /// One entry per marked quiz, in marking order.
    pub results: Vec<MarkedQuiz>,
}

impl MarkingReport {
    pub fn new(results: Vec<MarkedQuiz>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            trainee: None,
            results,
        }
    }

    pub fn with_trainee(mut self, summary: TraineeSummary) -> Self {
        self.trainee = Some(summary);
        self
    }

    /// Default file name: creation time to the millisecond plus the report id.
    pub fn file_name(&self) -> String {
        format!(
            "report-{}-{}.json",
            self.created_at.format("%Y-%m-%dT%H%M%S%.3f"),
            self.id.simple()
        )
    }

    /// Average mark across all results.
    pub fn mean_mark(&self) -> Option<f64> {
        if self.results.is_empty() {
            return None;
        }
        let total: u32 = self.results.iter().map(|r| r.mark).sum();
        Some(f64::from(total) / self.results.len() as f64)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: MarkingReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
