//! Per-run outcome report

use inksync_domain::PublishOutcome;
use serde::Serialize;

/// Outcome for one document
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Document key
    pub key: String,
    /// What happened
    #[serde(flatten)]
    pub outcome: PublishOutcome,
}

/// Aggregated outcomes of one reconciliation run
///
/// Built in document order; not persisted anywhere. The CLI renders it
/// as a table or JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Per-document entries, in processing order
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    /// Append the outcome for a document
    pub fn record(&mut self, key: String, outcome: PublishOutcome) {
        self.entries.push(ReportEntry { key, outcome });
    }

    /// Number of articles created this run
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, PublishOutcome::Created { .. }))
    }

    /// Number of articles updated this run
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, PublishOutcome::Updated { .. }))
    }

    /// Number of documents that failed this run
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, PublishOutcome::Failed { .. }))
    }

    /// Whether every document ended consistent with remote state
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "{} created, {} updated, {} failed",
            self.created(),
            self.updated(),
            self.failed()
        )
    }

    fn count(&self, pred: impl Fn(&PublishOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
