pub mod console;
pub mod progress;

use crate::model::{CheckRecord, Report, Summary};
use crate::normalize::records_from_value;
use std::path::Path;

/// Accumulates check records for one orchestrator run. Owned by the run for
/// its whole duration; invocations are strictly sequential, so no locking.
#[derive(Debug, Default)]
pub struct Reporter {
    results: Vec<CheckRecord>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of normalized records, preserving order.
    pub fn merge(&mut self, records: Vec<CheckRecord>) {
        self.results.extend(records);
    }

    /// Defensive entry point for untyped data. Objects and arrays are
    /// normalized; anything else is wrapped into a raw record rather than
    /// dropped.
    pub fn merge_value(&mut self, value: serde_json::Value) {
        self.results.extend(records_from_value(value));
    }

    pub fn results(&self) -> &[CheckRecord] {
        &self.results
    }

    /// Derive the report from the current record list. Pure: calling it any
    /// number of times without an intervening merge yields identical output.
    pub fn finalize(&self) -> Report {
        let total_tests = self.results.len();
        let passed = self.results.iter().filter(|r| r.success).count();
        let partial = self
            .results
            .iter()
            .filter(|r| r.partial && !r.success)
            .count();
        let total_issues = self.results.iter().map(CheckRecord::issue_count).sum();
        Report {
            summary: Summary {
                total_tests,
                passed,
                failed: total_tests - passed,
                partial,
                total_issues,
            },
            results: self.results.clone(),
        }
    }

    /// Write the finalized report as human-formatted JSON, overwriting any
    /// existing file. Filesystem failure here is the run's one fatal path.
    pub fn persist(&self, out: &Path) -> anyhow::Result<()> {
        std::fs::write(out, serde_json::to_string_pretty(&self.finalize())?)?;
        Ok(())
    }
}
