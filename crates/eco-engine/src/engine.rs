//! The `DecisionEngine` and its tick logic.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use eco_core::{ConditionSnapshot, RouteId, TripClock, TripConfig, TripId};
use eco_cost::{CostBreakdown, CostModel, ScoredRoute, best, compare, rank};
use eco_env::EnvironmentProvider;
use eco_route::{CandidateSet, RouteSummary, RoutingProvider};

use crate::{Decision, DecisionEvent, EngineConfig, EngineError, EngineResult, Progression, TripState, TripStatus};

/// Per-trip decision state machine.
///
/// `DecisionEngine<E, R>` owns its collaborators and processes ticks strictly
/// sequentially through `&mut self`.  Two engines never share mutable state;
/// the candidate set is behind an `Arc` and treated as read-only, so several
/// trips over the same origin/destination may share one.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct DecisionEngine<E: EnvironmentProvider, R: RoutingProvider> {
    pub(crate) trip: TripId,
    pub(crate) environment: E,
    pub(crate) router: R,
    pub(crate) model: CostModel,
    pub(crate) config: EngineConfig,
    pub(crate) trip_config: TripConfig,
    pub(crate) clock: TripClock,
    pub(crate) candidates: Arc<CandidateSet>,
    /// Last successfully sampled snapshot per candidate.
    pub(crate) snapshots: HashMap<RouteId, ConditionSnapshot>,
    pub(crate) state: TripState,
    /// Cost of the active route at the last tick where it could be scored.
    pub(crate) active_cost: Option<CostBreakdown>,
}

impl<E: EnvironmentProvider, R: RoutingProvider> DecisionEngine<E, R> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn trip(&self) -> TripId {
        self.trip
    }

    #[inline]
    pub fn state(&self) -> &TripState {
        &self.state
    }

    #[inline]
    pub fn candidates(&self) -> &Arc<CandidateSet> {
        &self.candidates
    }

    #[inline]
    pub fn clock(&self) -> &TripClock {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn trip_config(&self) -> &TripConfig {
        &self.trip_config
    }

    #[inline]
    pub fn cost_model(&self) -> &CostModel {
        &self.model
    }

    /// The snapshot most recently used to score `route`.
    pub fn last_snapshot(&self, route: RouteId) -> Option<&ConditionSnapshot> {
        self.snapshots.get(&route)
    }

    /// The active route's cost at the last tick where it could be scored.
    pub fn active_cost(&self) -> Option<&CostBreakdown> {
        self.active_cost.as_ref()
    }

    /// The summary of the active route.
    pub fn active_route(&self) -> EngineResult<&RouteSummary> {
        let id = self.active_id("read the active route of")?;
        Ok(self.candidates.get(id)?)
    }

    // ── Decision loop ─────────────────────────────────────────────────────

    /// Run one decision cycle and advance the clock.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidState`] once the trip is arrived or aborted.
    /// - [`EngineError::NoInitialSnapshot`] if the environment cannot be
    ///   sampled while planning.  The trip is aborted.
    /// - Scoring errors while planning abort the trip and are returned.
    ///
    /// Collaborator failures after planning never error; they yield a
    /// [`Decision::Degraded`] event instead.
    pub fn tick(&mut self) -> EngineResult<DecisionEvent> {
        if self.state.status.is_terminal() {
            return Err(EngineError::InvalidState { status: self.state.status, operation: "tick" });
        }
        self.state.tick = self.clock.current_tick;
        self.state.elapsed_secs = self.clock.elapsed_secs();

        let result = match self.state.status {
            TripStatus::Planning => {
                let planned = self.plan();
                if planned.is_err() {
                    self.state.status = TripStatus::Aborted;
                }
                planned
            }
            _ => self.step(),
        };
        self.clock.advance();
        result
    }

    /// Abort the trip immediately.
    pub fn abort(&mut self) -> EngineResult<DecisionEvent> {
        if self.state.status.is_terminal() {
            return Err(EngineError::InvalidState { status: self.state.status, operation: "abort" });
        }
        self.state.status = TripStatus::Aborted;
        info!(trip = %self.trip, tick = %self.state.tick, "trip aborted");
        Ok(self.event(Decision::Aborted, self.active_cost))
    }

    /// Score every candidate against its last known snapshot, best first.
    ///
    /// Read-only: no sampling, no state change.  Repeated calls without an
    /// intervening tick return identical results.  Candidates with no
    /// snapshot yet are left out.
    pub fn evaluate(&self) -> EngineResult<Vec<ScoredRoute>> {
        if self.state.status == TripStatus::Planning {
            return Err(EngineError::InvalidState { status: self.state.status, operation: "evaluate" });
        }
        let mut scored = Vec::with_capacity(self.candidates.len());
        for (position, route) in self.candidates.candidates().iter().enumerate() {
            if let Some(snapshot) = self.snapshots.get(&route.id) {
                scored.push(ScoredRoute::new(route, position, self.model.score(route, snapshot)?));
            }
        }
        Ok(rank(scored))
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Every candidate starts at the shared origin, so one sample scores all.
    fn plan(&mut self) -> EngineResult<DecisionEvent> {
        let origin = self.candidates.origin();
        let snapshot = self
            .environment
            .sample(origin, self.clock.current_unix_secs())
            .map_err(|e| {
                warn!(trip = %self.trip, error = %e, "initial environment sample failed");
                EngineError::NoInitialSnapshot(e)
            })?;

        let candidates = Arc::clone(&self.candidates);
        let mut scored = Vec::with_capacity(candidates.len());
        for (position, route) in candidates.candidates().iter().enumerate() {
            let cost = self.model.score(route, &snapshot)?;
            debug!(trip = %self.trip, route = %route.id, total_cost = cost.total_cost, "scored candidate");
            scored.push(ScoredRoute::new(route, position, cost));
            self.snapshots.insert(route.id, snapshot.clone());
        }

        let chosen = *best(&scored).ok_or(EngineError::EmptyCandidateSet)?;
        self.state.active_route = Some(chosen.id);
        self.state.status = TripStatus::InProgress;
        self.active_cost = Some(chosen.cost);
        info!(
            trip = %self.trip,
            route = %chosen.id,
            total_cost = chosen.cost.total_cost,
            candidates = scored.len(),
            "initial route selected",
        );
        Ok(self.event(Decision::Continue, Some(chosen.cost)))
    }

    // ── In-progress ticks ─────────────────────────────────────────────────

    fn step(&mut self) -> EngineResult<DecisionEvent> {
        if self.state.status == TripStatus::Rerouted {
            self.state.status = TripStatus::InProgress;
        }
        let active_id = self.active_id("tick")?;

        let increment = self.progress_increment(self.candidates.get(active_id)?);
        self.state.progress = (self.state.progress + increment).min(1.0);
        if self.state.progress >= 1.0 {
            self.state.status = TripStatus::Arrived;
            info!(trip = %self.trip, tick = %self.state.tick, route = %active_id, "arrived");
            return Ok(self.event(Decision::Arrived, self.active_cost));
        }

        let mut degraded = self.refresh_if_due(active_id);
        degraded |= self.sample_candidates();
        let (scored, incomplete) = self.score_candidates();
        degraded |= incomplete;

        let Some(active) = scored.iter().find(|s| s.id == active_id).copied() else {
            warn!(trip = %self.trip, tick = %self.state.tick, route = %active_id, "active route could not be scored");
            return Ok(self.event(Decision::Degraded, self.active_cost));
        };
        self.active_cost = Some(active.cost);

        if degraded {
            warn!(trip = %self.trip, tick = %self.state.tick, "degraded tick, keeping active route");
            return Ok(self.event(Decision::Degraded, Some(active.cost)));
        }

        let challenger = scored.iter().filter(|s| s.id != active_id).min_by(|a, b| compare(a, b));
        match challenger {
            Some(alt) if self.config.switch_policy.should_switch(active.cost.total_cost, alt.cost.total_cost) => {
                self.state.active_route = Some(alt.id);
                self.state.status = TripStatus::Rerouted;
                self.active_cost = Some(alt.cost);
                info!(
                    trip = %self.trip,
                    tick = %self.state.tick,
                    from = %active_id,
                    to = %alt.id,
                    active_cost = active.cost.total_cost,
                    alternative_cost = alt.cost.total_cost,
                    "switching route",
                );
                Ok(self.event(Decision::Switch { from: active_id, to: alt.id }, Some(alt.cost)))
            }
            _ => Ok(self.event(Decision::Continue, Some(active.cost))),
        }
    }

    fn progress_increment(&self, route: &RouteSummary) -> f64 {
        match self.config.progression {
            Progression::FixedStep(step) => step,
            Progression::Duration => {
                let route_secs = route.duration_min * 60.0;
                if route_secs > 0.0 {
                    f64::from(self.clock.tick_duration_secs) / route_secs
                } else {
                    1.0
                }
            }
        }
    }

    /// Re-fetch candidates when due.  Returns `true` if the refresh failed.
    fn refresh_if_due(&mut self, active: RouteId) -> bool {
        let interval = self.config.refresh_interval_ticks;
        if interval == 0 || self.state.tick.0 % interval != 0 {
            return false;
        }
        match self.candidates.refreshed(&self.router, active) {
            Ok(fresh) => {
                // Ids other than the active one may now name different paths.
                self.snapshots.retain(|id, _| *id == active);
                debug!(trip = %self.trip, candidates = fresh.len(), "candidate set refreshed");
                self.candidates = Arc::new(fresh);
                false
            }
            Err(e) => {
                warn!(trip = %self.trip, tick = %self.state.tick, error = %e, "candidate refresh failed");
                true
            }
        }
    }

    /// Sample every candidate at its own probe point.  Returns `true` if any
    /// sample failed; the previous snapshot for that route stays in place.
    /// A snapshot the model cannot score counts as a failed sample.
    fn sample_candidates(&mut self) -> bool {
        let candidates = Arc::clone(&self.candidates);
        let timestamp = self.clock.current_unix_secs();
        let mut failed = false;
        for route in candidates.candidates() {
            let probe = route.position_at(self.state.progress);
            let sampled = self
                .environment
                .sample(probe, timestamp)
                .map_err(EngineError::from)
                .and_then(|snapshot| {
                    self.model.score(route, &snapshot)?;
                    Ok(snapshot)
                });
            match sampled {
                Ok(snapshot) => {
                    self.snapshots.insert(route.id, snapshot);
                }
                Err(e) => {
                    warn!(
                        trip = %self.trip,
                        tick = %self.state.tick,
                        route = %route.id,
                        stale = self.snapshots.contains_key(&route.id),
                        error = %e,
                        "environment sample failed",
                    );
                    failed = true;
                }
            }
        }
        failed
    }

    /// Score candidates that have a snapshot.  Returns `true` alongside the
    /// scores if any candidate had to be left out.
    fn score_candidates(&self) -> (Vec<ScoredRoute>, bool) {
        let mut incomplete = false;
        let mut scored = Vec::with_capacity(self.candidates.len());
        for (position, route) in self.candidates.candidates().iter().enumerate() {
            let Some(snapshot) = self.snapshots.get(&route.id) else {
                incomplete = true;
                continue;
            };
            match self.model.score(route, snapshot) {
                Ok(cost) => {
                    debug!(
                        trip = %self.trip,
                        tick = %self.state.tick,
                        route = %route.id,
                        total_cost = cost.total_cost,
                        "scored candidate",
                    );
                    scored.push(ScoredRoute::new(route, position, cost));
                }
                Err(e) => {
                    warn!(trip = %self.trip, route = %route.id, error = %e, "scoring failed");
                    incomplete = true;
                }
            }
        }
        (scored, incomplete)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn active_id(&self, operation: &'static str) -> EngineResult<RouteId> {
        self.state
            .active_route
            .ok_or(EngineError::InvalidState { status: self.state.status, operation })
    }

    fn event(&self, decision: Decision, cost: Option<CostBreakdown>) -> DecisionEvent {
        DecisionEvent {
            trip: self.trip,
            tick: self.state.tick,
            decision,
            status: self.state.status,
            active_route: self.state.active_route,
            progress: self.state.progress,
            cost,
        }
    }
}
