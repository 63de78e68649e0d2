//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `decisions.csv`
//! - `trip_summaries.csv`
//!
//! Absent optional values are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DecisionRow, OutputResult, TripSummaryRow};

pub const DECISION_HEADERS: [&str; 12] = [
    "trip_id",
    "tick",
    "unix_time_secs",
    "decision",
    "status",
    "active_route",
    "switched_from",
    "progress",
    "total_cost",
    "fuel_liters",
    "co2_kg",
    "confidence",
];

pub const SUMMARY_HEADERS: [&str; 10] = [
    "trip_id",
    "status",
    "ticks",
    "switches",
    "degraded_ticks",
    "final_route",
    "route_history",
    "final_total_cost",
    "elapsed_secs",
    "abort_reason",
];

/// Writes trip output to two CSV files.
pub struct CsvWriter {
    decisions: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut decisions = Writer::from_path(dir.join("decisions.csv"))?;
        decisions.write_record(DECISION_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("trip_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self {
            decisions,
            summaries,
            finished: false,
        })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()> {
        for row in rows {
            self.decisions.write_record(&[
                row.trip_id.to_string(),
                row.tick.to_string(),
                row.unix_time_secs.to_string(),
                row.decision.to_owned(),
                row.status.to_owned(),
                opt(row.active_route),
                opt(row.switched_from),
                row.progress.to_string(),
                opt(row.total_cost),
                opt(row.fuel_liters),
                opt(row.co2_kg),
                opt(row.confidence),
            ])?;
        }
        Ok(())
    }

    fn write_trip_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.trip_id.to_string(),
            row.status.to_owned(),
            row.ticks.to_string(),
            row.switches.to_string(),
            row.degraded_ticks.to_string(),
            opt(row.final_route),
            row.route_history.clone(),
            opt(row.final_total_cost),
            row.elapsed_secs.to_string(),
            row.abort_reason.clone().unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.decisions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
