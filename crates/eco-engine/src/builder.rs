//! Fluent builder for constructing a [`DecisionEngine`].

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use eco_core::{GeoPoint, TripConfig, TripId};
use eco_cost::CostModel;
use eco_env::EnvironmentProvider;
use eco_route::{CandidateSet, RoutingProvider};

use crate::{DecisionEngine, EngineConfig, EngineError, EngineResult, TripState};

/// Fluent builder for [`DecisionEngine<E, R>`].
///
/// # Required inputs
///
/// - `TripId`
/// - `E: EnvironmentProvider` — condition sampling
/// - `R: RoutingProvider` — initial fetch and periodic refresh
/// - either `.candidates(set)` or `.endpoints(origin, destination)`
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                  |
/// |-----------------------|--------------------------|
/// | `.trip_config(c)`     | `TripConfig::default()`  |
/// | `.engine_config(c)`   | `EngineConfig::default()`|
/// | `.cost_model(m)`      | `CostModel::default()`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(TripId(0), SimulatedEnvironment::new(42), router)
///     .endpoints(nyc, boston)
///     .build()?;
/// let first = engine.tick()?;
/// ```
pub struct EngineBuilder<E: EnvironmentProvider, R: RoutingProvider> {
    trip:          TripId,
    environment:   E,
    router:        R,
    trip_config:   TripConfig,
    engine_config: EngineConfig,
    cost_model:    Option<CostModel>,
    candidates:    Option<Arc<CandidateSet>>,
    endpoints:     Option<(GeoPoint, GeoPoint)>,
}

impl<E: EnvironmentProvider, R: RoutingProvider> EngineBuilder<E, R> {
    pub fn new(trip: TripId, environment: E, router: R) -> Self {
        Self {
            trip,
            environment,
            router,
            trip_config:   TripConfig::default(),
            engine_config: EngineConfig::default(),
            cost_model:    None,
            candidates:    None,
            endpoints:     None,
        }
    }

    pub fn trip_config(mut self, config: TripConfig) -> Self {
        self.trip_config = config;
        self
    }

    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    pub fn cost_model(mut self, model: CostModel) -> Self {
        self.cost_model = Some(model);
        self
    }

    /// Use an existing candidate set, possibly shared with other trips.
    /// Takes precedence over `.endpoints(..)`.
    pub fn candidates(mut self, candidates: Arc<CandidateSet>) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Fetch the candidate set from the router at build time.
    pub fn endpoints(mut self, origin: GeoPoint, destination: GeoPoint) -> Self {
        self.endpoints = Some((origin, destination));
        self
    }

    /// Validate configuration, obtain the candidate set, and return an
    /// engine in the `Planning` state.
    ///
    /// Fails with [`EngineError::EmptyCandidateSet`] or
    /// [`EngineError::InvalidRoute`] when the router yields nothing usable.
    pub fn build(self) -> EngineResult<DecisionEngine<E, R>> {
        self.trip_config
            .validate()
            .map_err(|e| EngineError::Config(e.to_string()))?;
        self.engine_config.validate()?;

        let candidates = match (self.candidates, self.endpoints) {
            (Some(set), _) => set,
            (None, Some((origin, destination))) => {
                Arc::new(CandidateSet::fetch(&self.router, origin, destination)?)
            }
            (None, None) => {
                return Err(EngineError::Config(
                    "either a candidate set or trip endpoints must be supplied".into(),
                ));
            }
        };
        debug!(trip = %self.trip, candidates = candidates.len(), "decision engine built");

        Ok(DecisionEngine {
            trip:        self.trip,
            environment: self.environment,
            router:      self.router,
            model:       self.cost_model.unwrap_or_default(),
            config:      self.engine_config,
            clock:       self.trip_config.make_clock(),
            trip_config: self.trip_config,
            candidates,
            snapshots:   HashMap::new(),
            state:       TripState::new(self.trip),
            active_cost: None,
        })
    }
}
