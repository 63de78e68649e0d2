//! `eco-output` — trip output writers.
//!
//! Two backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created                                 |
//! |-----------|-------------|-----------------------------------------------|
//! | *(none)*  | CSV         | `decisions.csv`, `trip_summaries.csv`         |
//! | `sqlite`  | SQLite      | `output.db`                                   |
//!
//! Both implement [`OutputWriter`] and are driven by [`TripOutputObserver`],
//! which implements `eco_sim::TripObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use eco_output::{CsvWriter, TripOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TripOutputObserver::new(writer, engine.trip_config());
//! TripSimulator::new(engine).run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TripOutputObserver;
pub use row::{DecisionRow, TripSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
