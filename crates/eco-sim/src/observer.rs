//! Trip observer trait for decision reporting.

use tracing::{debug, info, warn};

use eco_core::TripId;
use eco_engine::{Decision, DecisionEvent};
use eco_route::CandidateSet;

use crate::TripSummary;

/// Callbacks invoked by [`TripSimulator::run`][crate::TripSimulator::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The engine knows nothing about how events
/// are rendered; this trait is the only way out.
///
/// # Example — switch counter
///
/// ```rust,ignore
/// struct SwitchCounter(u32);
///
/// impl TripObserver for SwitchCounter {
///     fn on_decision(&mut self, event: &DecisionEvent) {
///         if matches!(event.decision, Decision::Switch { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait TripObserver {
    /// Called once before the planning tick.
    fn on_trip_start(&mut self, _trip: TripId, _candidates: &CandidateSet) {}

    /// Called once per tick, and once more if the trip is aborted.
    fn on_decision(&mut self, _event: &DecisionEvent) {}

    /// Called once after the trip reaches a terminal state.
    fn on_trip_end(&mut self, _summary: &TripSummary) {}
}

impl<O: TripObserver + ?Sized> TripObserver for &mut O {
    fn on_trip_start(&mut self, trip: TripId, candidates: &CandidateSet) {
        (**self).on_trip_start(trip, candidates);
    }

    fn on_decision(&mut self, event: &DecisionEvent) {
        (**self).on_decision(event);
    }

    fn on_trip_end(&mut self, summary: &TripSummary) {
        (**self).on_trip_end(summary);
    }
}

/// A [`TripObserver`] that does nothing.
pub struct NoopObserver;

impl TripObserver for NoopObserver {}

/// Logs every decision through `tracing`.
pub struct TracingObserver;

impl TripObserver for TracingObserver {
    fn on_trip_start(&mut self, trip: TripId, candidates: &CandidateSet) {
        info!(%trip, candidates = candidates.len(), "trip started");
    }

    fn on_decision(&mut self, event: &DecisionEvent) {
        let route = event.active_route.map(|r| r.to_string()).unwrap_or_default();
        let total_cost = event.cost.map(|c| c.total_cost);
        match event.decision {
            Decision::Continue => {
                debug!(trip = %event.trip, tick = %event.tick, %route, progress = event.progress, ?total_cost, "continue");
            }
            Decision::Switch { from, to } => {
                info!(trip = %event.trip, tick = %event.tick, %from, %to, ?total_cost, "rerouted");
            }
            Decision::Arrived => {
                info!(trip = %event.trip, tick = %event.tick, %route, "arrived");
            }
            Decision::Degraded => {
                warn!(trip = %event.trip, tick = %event.tick, %route, "degraded decision on stale data");
            }
            Decision::Aborted => {
                warn!(trip = %event.trip, tick = %event.tick, "aborted");
            }
        }
    }

    fn on_trip_end(&mut self, summary: &TripSummary) {
        info!(
            trip = %summary.trip,
            status = %summary.status,
            ticks = summary.ticks,
            switches = summary.switches,
            degraded = summary.degraded_ticks,
            "trip finished",
        );
    }
}
