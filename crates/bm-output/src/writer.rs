//! The `OutputWriter` trait implemented by all backend writers.

use crate::{HistoryRow, OutputResult, TrialRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait OutputWriter {
    /// Write every snapshot of one trial's history.
    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()>;

    /// Write one per-trial summary row.
    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
