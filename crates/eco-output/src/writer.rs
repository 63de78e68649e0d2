//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DecisionRow, OutputResult, TripSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Observer callbacks cannot fail, so [`TripOutputObserver`] stores errors
/// internally; retrieve them with
/// [`take_error`][crate::TripOutputObserver::take_error].
///
/// [`TripOutputObserver`]: crate::TripOutputObserver
pub trait OutputWriter {
    /// Write a batch of decision rows.
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()>;

    /// Write one trip summary row.
    fn write_trip_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
