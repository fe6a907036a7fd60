//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `histories.csv`
//! - `trials.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputResult, TrialRow};

/// Writes trial output to two CSV files.
pub struct CsvWriter {
    histories: Writer<File>,
    trials:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut histories = Writer::from_path(dir.join("histories.csv"))?;
        histories.write_record(["trial", "event", "time", "x", "y", "speed", "angle"])?;

        let mut trials = Writer::from_path(dir.join("trials.csv"))?;
        trials.write_record([
            "trial",
            "status",
            "collisions",
            "no_collision_ticks",
            "field_events",
            "frequency",
            "mean_distance",
            "max_distance",
            "mean_free_path",
        ])?;

        Ok(Self {
            histories,
            trials,
            finished: false,
        })
    }
}

/// Missing statistics become empty fields.
fn opt(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        for row in rows {
            self.histories.write_record(&[
                row.trial.to_string(),
                row.event.to_string(),
                row.time.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.speed.to_string(),
                row.angle.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
        self.trials.write_record(&[
            row.trial.to_string(),
            row.status.to_owned(),
            row.collisions.to_string(),
            row.no_collision_ticks.to_string(),
            row.field_events.to_string(),
            opt(row.frequency),
            opt(row.mean_distance),
            opt(row.max_distance),
            opt(row.mean_free_path),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.histories.flush()?;
        self.trials.flush()?;
        Ok(())
    }
}
