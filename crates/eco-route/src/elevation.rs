//! Elevation profiles: sampling a polyline and summing climb/drop.
//!
//! Elevation lookups are network-bound, so a route is decimated to a handful
//! of sample points before the [`ElevationSource`] is queried.

use eco_core::GeoPoint;
use tracing::warn;

use crate::{RouteResult, RouteSummary};

/// Default number of evenly spaced samples taken from a polyline (the final
/// point is always added on top).
pub const MAX_ELEVATION_SAMPLES: usize = 5;

/// Pluggable elevation lookup.
///
/// Implementations must be `Send + Sync` so a single source can serve
/// several trips.
pub trait ElevationSource: Send + Sync {
    /// Elevation in metres for each point, in the same order.
    fn elevations(&self, points: &[GeoPoint]) -> RouteResult<Vec<f64>>;
}

/// Indices of an evenly strided subset of a `len`-point polyline.
///
/// Takes every `len / max_samples`-th point and always includes the last one.
/// Returns an empty list for polylines shorter than two points.
pub fn sample_indices(len: usize, max_samples: usize) -> Vec<usize> {
    if len < 2 {
        return vec![];
    }
    let step = (len / max_samples.max(1)).max(1);
    let mut idx: Vec<usize> = (0..len).step_by(step).collect();
    if idx.last() != Some(&(len - 1)) {
        idx.push(len - 1);
    }
    idx
}

/// Total (ascent, descent) in metres over consecutive elevation samples.
pub fn ascent_descent(elevations: &[f64]) -> (f64, f64) {
    elevations
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0, 0.0), |(up, down), diff| {
            if diff > 0.0 {
                (up + diff, down)
            } else {
                (up, down - diff)
            }
        })
}

/// Fill in `route.ascent_m`/`descent_m` from `source`.
///
/// A failing or short-changing source leaves the route flat (0 m / 0 m)
/// rather than failing the fetch.
pub fn annotate_elevation<S: ElevationSource + ?Sized>(route: RouteSummary, source: &S) -> RouteSummary {
    let idx = sample_indices(route.waypoints.len(), MAX_ELEVATION_SAMPLES);
    if idx.is_empty() {
        return route.with_elevation(0.0, 0.0);
    }
    let points: Vec<GeoPoint> = idx.iter().map(|&i| route.waypoints[i]).collect();

    match source.elevations(&points) {
        Ok(elev) if elev.len() == points.len() && elev.iter().all(|e| e.is_finite()) => {
            let (up, down) = ascent_descent(&elev);
            route.with_elevation(up, down)
        }
        Ok(elev) => {
            warn!(route = %route.id, expected = points.len(), got = elev.len(), "unusable elevation profile; assuming flat");
            route.with_elevation(0.0, 0.0)
        }
        Err(e) => {
            warn!(route = %route.id, error = %e, "elevation lookup failed; assuming flat");
            route.with_elevation(0.0, 0.0)
        }
    }
}
