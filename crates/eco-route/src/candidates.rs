//! The bounded set of alternatives for one origin/destination pair.

use eco_core::{GeoPoint, RouteId};
use tracing::debug;

use crate::{RouteError, RouteResult, RouteSummary, RoutingProvider};

/// Upper bound on alternatives kept per origin/destination pair.
pub const MAX_CANDIDATES: usize = 3;

/// Two routes closer than this (road distance and midpoint) are treated as
/// the same path.
pub const DEFAULT_DEDUP_TOLERANCE_KM: f64 = 0.5;

/// Distinct candidate routes sharing one origin and destination.
///
/// # Invariants
///
/// - Holds between 1 and [`MAX_CANDIDATES`] routes.
/// - Route ids are unique.
/// - Order is the collaborator's fetch order, not a ranking.
/// - Routes are never mutated; refreshing builds a new set.
///
/// Once built, a `CandidateSet` is read-only and may be shared between trips
/// behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    origin:       GeoPoint,
    destination:  GeoPoint,
    routes:       Vec<RouteSummary>,
    tolerance_km: f64,
}

impl CandidateSet {
    /// Build from an already fetched list using the default tolerance.
    pub fn from_routes(
        origin:      GeoPoint,
        destination: GeoPoint,
        routes:      Vec<RouteSummary>,
    ) -> RouteResult<Self> {
        Self::with_tolerance(origin, destination, routes, DEFAULT_DEDUP_TOLERANCE_KM)
    }

    /// Build from an already fetched list.
    ///
    /// Every route is validated first (an invalid route is fatal), then
    /// near-identical routes are dropped and the rest capped at
    /// [`MAX_CANDIDATES`].  Fewer distinct routes simply yield a smaller set.
    pub fn with_tolerance(
        origin:       GeoPoint,
        destination:  GeoPoint,
        routes:       Vec<RouteSummary>,
        tolerance_km: f64,
    ) -> RouteResult<Self> {
        let routes = select_distinct(routes, tolerance_km, None)?;
        Ok(Self { origin, destination, routes, tolerance_km })
    }

    /// Fetch from `provider` and build the set.
    pub fn fetch<P: RoutingProvider + ?Sized>(
        provider:    &P,
        origin:      GeoPoint,
        destination: GeoPoint,
    ) -> RouteResult<Self> {
        let routes = provider.fetch_routes(origin, destination)?;
        debug!(fetched = routes.len(), "routing collaborator returned routes");
        Self::from_routes(origin, destination, routes)
    }

    /// Re-fetch from `provider`, guaranteeing that route `keep` survives.
    ///
    /// A fresh route near-identical to `keep` is replaced by the existing
    /// summary so its id and attributes stay stable.  Fresh routes that
    /// reuse `keep`'s id for a different path are given a new id.
    pub fn refreshed<P: RoutingProvider + ?Sized>(&self, provider: &P, keep: RouteId) -> RouteResult<Self> {
        let kept = self.get(keep)?.clone();
        let fresh = provider.fetch_routes(self.origin, self.destination)?;

        let mut next_id = fresh
            .iter()
            .map(|r| r.id.0)
            .chain(self.routes.iter().map(|r| r.id.0))
            .max()
            .map_or(0, |m| m.saturating_add(1));

        let mut merged = Vec::with_capacity(fresh.len() + 1);
        let mut kept_placed = false;
        for mut route in fresh {
            if !kept_placed && route.near_identical(&kept, self.tolerance_km) {
                merged.push(kept.clone());
                kept_placed = true;
                continue;
            }
            if route.id == kept.id {
                route.id = RouteId(next_id);
                next_id = next_id.saturating_add(1);
            }
            merged.push(route);
        }
        if !kept_placed {
            merged.push(kept);
        }

        let routes = select_distinct(merged, self.tolerance_km, Some(keep))?;
        Ok(Self {
            origin:       self.origin,
            destination:  self.destination,
            routes,
            tolerance_km: self.tolerance_km,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All candidates in insertion order.
    #[inline]
    pub fn candidates(&self) -> &[RouteSummary] {
        &self.routes
    }

    /// Look up a candidate by id.
    pub fn get(&self, id: RouteId) -> RouteResult<&RouteSummary> {
        self.routes
            .iter()
            .find(|r| r.id == id)
            .ok_or(RouteError::NotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: RouteId) -> bool {
        self.routes.iter().any(|r| r.id == id)
    }

    /// Position of `id` in insertion order.
    pub fn position(&self, id: RouteId) -> Option<usize> {
        self.routes.iter().position(|r| r.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = RouteId> + '_ {
        self.routes.iter().map(|r| r.id)
    }

    /// Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[inline]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> GeoPoint {
        self.destination
    }
}

/// Validate, de-duplicate, and cap `routes`, keeping insertion order.
///
/// When `pinned` is given and would fall past the cap, it replaces the last
/// kept route so it is never dropped.
fn select_distinct(
    routes:       Vec<RouteSummary>,
    tolerance_km: f64,
    pinned:       Option<RouteId>,
) -> RouteResult<Vec<RouteSummary>> {
    let mut distinct: Vec<RouteSummary> = Vec::with_capacity(routes.len());
    for route in routes {
        route.validate()?;
        if distinct.iter().any(|r| r.id == route.id) {
            return Err(RouteError::DuplicateId(route.id));
        }
        if distinct.iter().any(|r| r.near_identical(&route, tolerance_km)) {
            debug!(route = %route.id, "dropping near-identical alternative");
            continue;
        }
        distinct.push(route);
    }

    if let Some(pin) = pinned {
        if let Some(pos) = distinct.iter().position(|r| r.id == pin) {
            if pos >= MAX_CANDIDATES {
                let pinned_route = distinct.remove(pos);
                distinct.truncate(MAX_CANDIDATES - 1);
                distinct.push(pinned_route);
            }
        }
    }
    distinct.truncate(MAX_CANDIDATES);

    if distinct.is_empty() {
        return Err(RouteError::Empty);
    }
    Ok(distinct)
}
