//! `bm-output`: trial output writers for brownian_rs.
//!
//! Two backends are provided, one behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created                      |
//! |-----------|-------------|------------------------------------|
//! | *(none)*  | CSV         | `histories.csv`, `trials.csv`      |
//! | `sqlite`  | SQLite      | `output.db`                        |
//!
//! Both implement [`OutputWriter`]; [`record_batch`] drives either one from a
//! finished [`BatchReport`](bm_sim::BatchReport).
//!
//! # Usage
//!
//! ```rust,ignore
//! use bm_output::{record_batch, CsvWriter};
//!
//! let report = bm_sim::run_batch(&config, 100, 42)?;
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! record_batch(&mut writer, &report)?;
//! ```

pub mod csv;
pub mod error;
pub mod record;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use record::{record_batch, record_outcome};
pub use row::{HistoryRow, TrialRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
