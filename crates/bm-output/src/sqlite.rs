//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `histories` and `trials`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{HistoryRow, OutputResult, TrialRow};

/// Writes trial output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS histories (
                 trial INTEGER NOT NULL,
                 event INTEGER NOT NULL,
                 time  REAL    NOT NULL,
                 x     REAL    NOT NULL,
                 y     REAL    NOT NULL,
                 speed REAL    NOT NULL,
                 angle REAL    NOT NULL,
                 PRIMARY KEY (trial, event)
             );
             CREATE TABLE IF NOT EXISTS trials (
                 trial              INTEGER PRIMARY KEY,
                 status             TEXT    NOT NULL,
                 collisions         INTEGER NOT NULL,
                 no_collision_ticks INTEGER NOT NULL,
                 field_events       INTEGER NOT NULL,
                 frequency          REAL,
                 mean_distance      REAL,
                 max_distance       REAL,
                 mean_free_path     REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO histories (trial, event, time, x, y, speed, angle) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.trial, row.event, row.time, row.x, row.y, row.speed, row.angle,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO trials (trial, status, collisions, no_collision_ticks, field_events, \
             frequency, mean_distance, max_distance, mean_free_path) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.trial,
                row.status,
                row.collisions as i64,
                row.no_collision_ticks as i64,
                row.field_events as i64,
                row.frequency,
                row.mean_distance,
                row.max_distance,
                row.mean_free_path,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
