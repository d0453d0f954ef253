// Run report
//
// Ordered per-item outcomes accumulated by the batch driver. The report
// is append-only during the run and read-only afterwards; the CLI owns
// rendering.

use serde::Serialize;

/// Outcome of processing one work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// A mutation was issued and accepted.
    Applied,
    /// Observed state already matched desired state; nothing sent.
    Skipped,
    /// The item failed (DNS resolution, API fault); the batch continued.
    Failed,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::Skipped => f.write_str("skipped"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// One line of the run report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub item: String,
    pub outcome: Outcome,
    pub detail: String,
}

/// Ordered record of a whole batch run.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct RunReport {
    entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&mut self, item: impl Into<String>, detail: impl Into<String>) {
        self.push(item, Outcome::Applied, detail);
    }

    pub fn skipped(&mut self, item: impl Into<String>, detail: impl Into<String>) {
        self.push(item, Outcome::Skipped, detail);
    }

    pub fn failed(&mut self, item: impl Into<String>, detail: impl Into<String>) {
        self.push(item, Outcome::Failed, detail);
    }

    fn push(&mut self, item: impl Into<String>, outcome: Outcome, detail: impl Into<String>) {
        self.entries.push(ReportEntry {
            item: item.into(),
            outcome,
            detail: detail.into(),
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn applied_count(&self) -> usize {
        self.count(Outcome::Applied)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(Outcome::Skipped)
    }

    pub fn failed_count(&self) -> usize {
        self.count(Outcome::Failed)
    }

    /// Entries that failed, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| e.outcome == Outcome::Failed)
    }

    /// One-line tally for the end of the run.
    pub fn summary(&self) -> String {
        format!(
            "{} processed: {} applied, {} skipped, {} failed",
            self.len(),
            self.applied_count(),
            self.skipped_count(),
            self.failed_count(),
        )
    }
}
