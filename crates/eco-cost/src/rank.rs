//! Deterministic ordering and role labelling of scored candidates.

use std::cmp::Ordering;
use std::fmt;

use eco_core::RouteId;
use eco_route::RouteSummary;

use crate::CostBreakdown;

/// A candidate together with its cost under the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRoute {
    pub id: RouteId,
    /// Index of the route in its candidate set (insertion order).
    pub position: usize,
    pub distance_km: f64,
    pub ascent_m: f64,
    pub cost: CostBreakdown,
}

impl ScoredRoute {
    pub fn new(route: &RouteSummary, position: usize, cost: CostBreakdown) -> Self {
        Self {
            id: route.id,
            position,
            distance_km: route.distance_km,
            ascent_m: route.ascent_m,
            cost,
        }
    }
}

/// Lowest total cost first, then shortest distance, then insertion order.
pub fn compare(a: &ScoredRoute, b: &ScoredRoute) -> Ordering {
    a.cost
        .total_cost
        .total_cmp(&b.cost.total_cost)
        .then_with(|| a.distance_km.total_cmp(&b.distance_km))
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort `scored` best-first using [`compare`].
pub fn rank(mut scored: Vec<ScoredRoute>) -> Vec<ScoredRoute> {
    scored.sort_by(compare);
    scored
}

/// The best entry of `scored`, or `None` if empty.
pub fn best(scored: &[ScoredRoute]) -> Option<&ScoredRoute> {
    scored.iter().min_by(|a, b| compare(a, b))
}

// ── Roles ─────────────────────────────────────────────────────────────────────

/// Presentation label for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteRole {
    /// Lowest CO2.
    MostEfficient,
    /// Lowest expected time.
    Fastest,
    /// Lowest total cost among the remaining routes.
    Balanced,
    /// One route is both the fastest and the most efficient.
    FastestAndMostEfficient,
}

impl RouteRole {
    pub fn label(self) -> &'static str {
        match self {
            RouteRole::MostEfficient => "Most Efficient",
            RouteRole::Fastest => "Fastest Route",
            RouteRole::Balanced => "Balanced Option",
            RouteRole::FastestAndMostEfficient => "Fastest & Most Efficient",
        }
    }
}

impl fmt::Display for RouteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Assign presentation roles.  Each route receives at most one role; routes
/// left over once every role is taken receive none.
pub fn label_roles(scored: &[ScoredRoute]) -> Vec<(RouteId, RouteRole)> {
    let by = |key: fn(&ScoredRoute) -> f64| {
        scored
            .iter()
            .min_by(|a, b| key(a).total_cmp(&key(b)).then_with(|| compare(a, b)))
    };
    let (Some(efficient), Some(fastest)) = (by(|s| s.cost.co2_kg), by(|s| s.cost.time_min)) else {
        return Vec::new();
    };

    if efficient.id == fastest.id {
        return vec![(efficient.id, RouteRole::FastestAndMostEfficient)];
    }

    let mut roles = vec![(efficient.id, RouteRole::MostEfficient), (fastest.id, RouteRole::Fastest)];
    let balanced = scored
        .iter()
        .filter(|s| s.id != efficient.id && s.id != fastest.id)
        .min_by(|a, b| compare(a, b));
    if let Some(balanced) = balanced {
        roles.push((balanced.id, RouteRole::Balanced));
    }
    roles
}
