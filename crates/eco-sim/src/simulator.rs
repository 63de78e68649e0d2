//! The `TripSimulator` driving loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

use eco_engine::{Decision, DecisionEngine, DecisionEvent, EngineError};
use eco_env::EnvironmentProvider;
use eco_route::RoutingProvider;

use crate::{SimError, SimResult, TripObserver, TripSummary};

// ── AbortHandle ───────────────────────────────────────────────────────────────

/// Cancels a running trip from anywhere, including another thread.
///
/// Checked before every tick.  A tick already in flight completes; its
/// result is reported and the trip is aborted before the next one.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ── TripSimulator ─────────────────────────────────────────────────────────────

/// Drives one [`DecisionEngine`] until it reaches a terminal state.
pub struct TripSimulator<E: EnvironmentProvider, R: RoutingProvider> {
    engine:    DecisionEngine<E, R>,
    abort:     AbortHandle,
    max_ticks: u64,
    summary:   TripSummary,
}

impl<E: EnvironmentProvider, R: RoutingProvider> TripSimulator<E, R> {
    /// Wrap `engine`, taking the tick limit from its trip configuration.
    pub fn new(engine: DecisionEngine<E, R>) -> Self {
        let max_ticks = engine.trip_config().max_ticks;
        let summary = TripSummary::new(engine.trip());
        Self {
            engine,
            abort: AbortHandle::new(),
            max_ticks,
            summary,
        }
    }

    /// Override the tick limit.
    pub fn max_ticks(mut self, max_ticks: u64) -> SimResult<Self> {
        if max_ticks == 0 {
            return Err(SimError::Config("max_ticks must be positive".into()));
        }
        self.max_ticks = max_ticks;
        Ok(self)
    }

    /// Share an existing abort handle, e.g. one handle for a whole fleet.
    pub fn with_abort_handle(mut self, handle: AbortHandle) -> Self {
        self.abort = handle;
        self
    }

    /// A handle that aborts this trip.
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    pub fn engine(&self) -> &DecisionEngine<E, R> {
        &self.engine
    }

    /// The summary so far.
    pub fn summary(&self) -> &TripSummary {
        &self.summary
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current state to a terminal state.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the trip could not be planned (for
    /// example [`EngineError::NoInitialSnapshot`]).  Failures after planning
    /// abort the trip; they are reported to the observer and recorded in
    /// [`TripSummary::abort_reason`] instead.
    pub fn run<O: TripObserver>(&mut self, observer: &mut O) -> SimResult<TripSummary> {
        observer.on_trip_start(self.engine.trip(), self.engine.candidates());
        let outcome = self.drive(u64::MAX, observer);
        observer.on_trip_end(&self.summary);
        outcome.map(|()| self.summary.clone())
    }

    /// Run at most `n` more ticks, stopping early at a terminal state.
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_trip_start` or `on_trip_end`.
    pub fn run_ticks<O: TripObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.drive(n, observer)
    }

    // ── Loop ──────────────────────────────────────────────────────────────

    fn drive<O: TripObserver>(&mut self, budget: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..budget {
            if self.engine.state().status().is_terminal() {
                break;
            }
            if self.abort.is_aborted() {
                self.stop("abort requested", observer)?;
                break;
            }
            if self.summary.ticks >= self.max_ticks {
                warn!(trip = %self.engine.trip(), max_ticks = self.max_ticks, "tick limit reached");
                self.stop("tick limit reached", observer)?;
                break;
            }

            match self.engine.tick() {
                Ok(event) => self.report(&event, observer),
                Err(e) => return self.fail(e, observer),
            }
        }
        Ok(())
    }

    fn report<O: TripObserver>(&mut self, event: &DecisionEvent, observer: &mut O) {
        self.summary.record(event);
        self.summary.elapsed_secs = self.engine.state().elapsed_secs();
        observer.on_decision(event);
    }

    fn stop<O: TripObserver>(&mut self, reason: &str, observer: &mut O) -> SimResult<()> {
        let event = self.engine.abort()?;
        self.summary.abort_reason = Some(reason.to_owned());
        self.report(&event, observer);
        Ok(())
    }

    /// A tick failed.  Planning failures propagate; anything later aborts.
    fn fail<O: TripObserver>(&mut self, error: EngineError, observer: &mut O) -> SimResult<()> {
        warn!(trip = %self.engine.trip(), %error, "decision tick failed");
        let planned = self.engine.state().active_route().is_some();
        if !self.engine.state().status().is_terminal() {
            self.stop(&error.to_string(), observer)?;
        } else {
            // The engine already aborted itself; report it like any other abort.
            let state = self.engine.state();
            let event = DecisionEvent {
                trip: state.trip(),
                tick: state.tick(),
                decision: Decision::Aborted,
                status: state.status(),
                active_route: state.active_route(),
                progress: state.progress(),
                cost: self.engine.active_cost().copied(),
            };
            self.summary.abort_reason = Some(error.to_string());
            self.report(&event, observer);
        }
        if planned { Ok(()) } else { Err(error.into()) }
    }
}
