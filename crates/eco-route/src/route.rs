//! Per-route static attributes.

use eco_core::{GeoPoint, RouteId};

use crate::{RouteError, RouteResult};

/// One candidate path between an origin and a destination.
///
/// Distance, elevation, and duration never change after the routing
/// collaborator produced the summary; only the conditions used to score it
/// do.  A [`CandidateSet`][crate::CandidateSet] hands out shared references
/// only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    pub id: RouteId,
    /// Ordered polyline from origin to destination.
    pub waypoints: Vec<GeoPoint>,
    /// Road distance reported by the collaborator, in kilometres.
    pub distance_km: f64,
    /// Total climb along the route, in metres.
    pub ascent_m: f64,
    /// Total drop along the route, in metres.
    pub descent_m: f64,
    /// Nominal free-flow duration, in minutes.
    pub duration_min: f64,
}

impl RouteSummary {
    /// A route with no elevation data yet (flat until annotated).
    pub fn new(id: RouteId, waypoints: Vec<GeoPoint>, distance_km: f64, duration_min: f64) -> Self {
        Self {
            id,
            waypoints,
            distance_km,
            ascent_m: 0.0,
            descent_m: 0.0,
            duration_min,
        }
    }

    pub fn with_elevation(mut self, ascent_m: f64, descent_m: f64) -> Self {
        self.ascent_m = ascent_m;
        self.descent_m = descent_m;
        self
    }

    /// Check the attributes every consumer relies on.
    pub fn validate(&self) -> RouteResult<()> {
        let invalid = |reason: &str| RouteError::InvalidRoute {
            route:  self.id,
            reason: reason.to_owned(),
        };
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err(invalid("distance must be positive"));
        }
        if !self.duration_min.is_finite() || self.duration_min < 0.0 {
            return Err(invalid("duration must be non-negative"));
        }
        if !self.ascent_m.is_finite() || self.ascent_m < 0.0
            || !self.descent_m.is_finite() || self.descent_m < 0.0
        {
            return Err(invalid("ascent and descent must be non-negative"));
        }
        if self.waypoints.len() < 2 {
            return Err(invalid("need at least an origin and a destination waypoint"));
        }
        if !self.waypoints.iter().all(|p| p.is_valid()) {
            return Err(invalid("waypoint outside WGS-84 range"));
        }
        Ok(())
    }

    /// Great-circle length of the polyline in kilometres.
    pub fn polyline_km(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|w| w[0].distance_km(w[1]))
            .sum()
    }

    /// Interpolated position after travelling `progress` (0.0–1.0) of the
    /// polyline length.
    ///
    /// Returns the first waypoint for an empty or zero-length polyline.
    pub fn position_at(&self, progress: f64) -> GeoPoint {
        let Some(&first) = self.waypoints.first() else {
            return GeoPoint::new(0.0, 0.0);
        };
        let total = self.polyline_km();
        if total <= 0.0 {
            return first;
        }

        let mut remaining = total * progress.clamp(0.0, 1.0);
        for w in self.waypoints.windows(2) {
            let seg = w[0].distance_km(w[1]);
            if remaining <= seg {
                let t = if seg > 0.0 { remaining / seg } else { 0.0 };
                return w[0].lerp(w[1], t);
            }
            remaining -= seg;
        }
        *self.waypoints.last().unwrap_or(&first)
    }

    /// Point halfway along the polyline.
    #[inline]
    pub fn midpoint(&self) -> GeoPoint {
        self.position_at(0.5)
    }

    /// `true` if `other` is indistinguishable from `self` for a driver: road
    /// distance within `tolerance_km` and polyline midpoints within
    /// `tolerance_km` of each other.
    pub fn near_identical(&self, other: &RouteSummary, tolerance_km: f64) -> bool {
        (self.distance_km - other.distance_km).abs() <= tolerance_km
            && self.midpoint().distance_km(other.midpoint()) <= tolerance_km
    }
}
