//! Write a whole batch through any backend.

use bm_sim::{BatchReport, TrialOutcome};

use crate::{HistoryRow, OutputResult, OutputWriter, TrialRow};

/// Write one trial's history and summary row.
pub fn record_outcome<W: OutputWriter>(writer: &mut W, outcome: &TrialOutcome) -> OutputResult<()> {
    writer.write_history(&HistoryRow::from_history(outcome.id, &outcome.history))?;
    writer.write_trial(&TrialRow::from_outcome(outcome))
}

/// Write every trial of `report` in `TrialId` order, then finish the writer.
pub fn record_batch<W: OutputWriter>(writer: &mut W, report: &BatchReport) -> OutputResult<()> {
    for outcome in &report.outcomes {
        record_outcome(writer, outcome)?;
    }
    writer.finish()
}
