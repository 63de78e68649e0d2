//! `TripOutputObserver<W>` — bridges `TripObserver` to an `OutputWriter`.

use eco_core::{TripClock, TripConfig};
use eco_engine::DecisionEvent;
use eco_sim::{TripObserver, TripSummary};

use crate::row::{DecisionRow, TripSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`TripObserver`] that writes decision events and the trip summary to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `TripObserver`
/// methods have no return value.  After `run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TripOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      TripClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TripOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for wall-clock
    /// conversion.
    pub fn new(writer: W, config: &TripConfig) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TripObserver for TripOutputObserver<W> {
    fn on_decision(&mut self, event: &DecisionEvent) {
        let row = DecisionRow::from_event(event, &self.clock);
        let result = self.writer.write_decisions(&[row]);
        self.store_err(result);
    }

    fn on_trip_end(&mut self, summary: &TripSummary) {
        let result = self.writer.write_trip_summary(&TripSummaryRow::from(summary));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
