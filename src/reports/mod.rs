//! Report generation over loaded developer records.
//!
//! Report kinds are a tagged enum dispatched by the CLI `--report` selector;
//! adding a report means adding a variant and a match arm here.

pub mod performance;

use clap::ValueEnum;

use crate::model::Developer;
use crate::reports::performance::ReportRow;

/// The report to generate. Only the performance report exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Per-position average performance, ranked descending.
    Performance,
}

impl ReportKind {
    /// Runs the selected report over the given records.
    pub fn generate(self, records: &[Developer]) -> Vec<ReportRow> {
        match self {
            ReportKind::Performance => performance::generate(records),
        }
    }
}
