//! Routing collaborator trait and two simple implementations.
//!
//! # Pluggability
//!
//! The decision engine only ever fetches candidates through
//! [`RoutingProvider`], so a network-backed router (OSRM, GraphHopper, …)
//! lives entirely outside this workspace.  The two implementations here are
//! the straight-line fallback and a fixed list for demos and tests.

use std::sync::Arc;

use eco_core::{GeoPoint, RouteId};

use crate::{RouteResult, RouteSummary};

// ── RoutingProvider trait ─────────────────────────────────────────────────────

/// Source of candidate routes for an origin/destination pair.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one provider can be shared by
/// independent trips running on different threads.
pub trait RoutingProvider: Send + Sync {
    /// Fetch up to a small bounded number of alternatives, in the
    /// collaborator's own order.  May return fewer than requested.
    fn fetch_routes(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<Vec<RouteSummary>>;
}

impl<T: RoutingProvider + ?Sized> RoutingProvider for Arc<T> {
    fn fetch_routes(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<Vec<RouteSummary>> {
        (**self).fetch_routes(origin, destination)
    }
}

impl<T: RoutingProvider + ?Sized> RoutingProvider for Box<T> {
    fn fetch_routes(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<Vec<RouteSummary>> {
        (**self).fetch_routes(origin, destination)
    }
}

// ── StaticRouter ──────────────────────────────────────────────────────────────

/// Returns the same pre-built routes for every request.
#[derive(Debug, Clone, Default)]
pub struct StaticRouter {
    routes: Vec<RouteSummary>,
}

impl StaticRouter {
    pub fn new(routes: Vec<RouteSummary>) -> Self {
        Self { routes }
    }
}

impl RoutingProvider for StaticRouter {
    fn fetch_routes(&self, _origin: GeoPoint, _destination: GeoPoint) -> RouteResult<Vec<RouteSummary>> {
        Ok(self.routes.clone())
    }
}

// ── StraightLineRouter ────────────────────────────────────────────────────────

/// Last-resort router: one route along the great circle, inflated by a
/// detour factor to approximate the road network.
///
/// | Parameter       | Default |
/// |-----------------|---------|
/// | `detour_factor` | 1.2     |
/// | `speed_kmh`     | 60      |
#[derive(Debug, Clone, Copy)]
pub struct StraightLineRouter {
    pub detour_factor: f64,
    pub speed_kmh:     f64,
}

impl Default for StraightLineRouter {
    fn default() -> Self {
        Self { detour_factor: 1.2, speed_kmh: 60.0 }
    }
}

impl RoutingProvider for StraightLineRouter {
    fn fetch_routes(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<Vec<RouteSummary>> {
        let distance_km = origin.distance_km(destination) * self.detour_factor;
        let duration_min = distance_km / self.speed_kmh * 60.0;
        Ok(vec![RouteSummary::new(
            RouteId(0),
            vec![origin, destination],
            distance_km,
            duration_min,
        )])
    }
}
