use serde::{Deserialize, Serialize};

/// Result of processing one flight-log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// Coordinates embedded into the image on disk.
    Tagged(String),
    /// Named image absent from the source folder; listed in the failure report.
    SkippedMissing(String),
    /// Row could not be processed (bad row data or a failed metadata write).
    Failed { identifier: String, reason: String },
}

/// Ordered per-row outcomes of a batch run.
///
/// Returned to the caller instead of accumulating failures in shared state;
/// the failure report is derived from it after the pass completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<RowOutcome>,
}

impl BatchReport {
    pub fn record(&mut self, outcome: RowOutcome) {
        self.outcomes.push(outcome);
    }

    /// Identifiers of rows whose image was missing, in input order.
    pub fn missing_files(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                RowOutcome::SkippedMissing(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn tagged_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, RowOutcome::Tagged(_)))
            .count()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_files().len()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, RowOutcome::Failed { .. }))
            .count()
    }

    pub fn summary(&self) -> String {
        format!(
            "Processed {} rows: {} tagged, {} missing, {} failed",
            self.outcomes.len(),
            self.tagged_count(),
            self.missing_count(),
            self.failed_count()
        )
    }
}
