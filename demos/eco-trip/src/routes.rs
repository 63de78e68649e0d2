//! Three hand-drawn New York → Boston corridors.

use eco_core::{GeoPoint, RouteId};
use eco_route::RouteSummary;

pub const NEW_YORK: GeoPoint = GeoPoint { lat: 40.7128, lon: -74.0060 };
pub const BOSTON: GeoPoint = GeoPoint { lat: 42.3601, lon: -71.0589 };

const NEW_HAVEN: GeoPoint = GeoPoint { lat: 41.3083, lon: -72.9279 };
const PROVIDENCE: GeoPoint = GeoPoint { lat: 41.8240, lon: -71.4128 };
const DANBURY: GeoPoint = GeoPoint { lat: 41.3948, lon: -73.4540 };
const HARTFORD: GeoPoint = GeoPoint { lat: 41.7658, lon: -72.6734 };
const STURBRIDGE: GeoPoint = GeoPoint { lat: 42.1084, lon: -72.0787 };
const SPRINGFIELD: GeoPoint = GeoPoint { lat: 42.1015, lon: -72.5898 };

/// `(name, summary)` for every corridor, in the order a router would list them.
pub fn corridors() -> Vec<(&'static str, RouteSummary)> {
    vec![
        (
            "I-95 coastal",
            RouteSummary::new(RouteId(0), vec![NEW_YORK, NEW_HAVEN, PROVIDENCE, BOSTON], 346.0, 235.0)
                .with_elevation(420.0, 410.0),
        ),
        (
            "I-84 / I-90 inland",
            RouteSummary::new(RouteId(1), vec![NEW_YORK, DANBURY, HARTFORD, STURBRIDGE, BOSTON], 350.0, 240.0)
                .with_elevation(980.0, 970.0),
        ),
        (
            "I-91 / I-90 via Springfield",
            RouteSummary::new(RouteId(2), vec![NEW_YORK, NEW_HAVEN, HARTFORD, SPRINGFIELD, BOSTON], 380.0, 255.0)
                .with_elevation(760.0, 750.0),
        ),
    ]
}

/// Display name for `id`, or its numeric form if unknown.
pub fn name_of(id: RouteId) -> String {
    corridors()
        .into_iter()
        .find(|(_, r)| r.id == id)
        .map(|(name, _)| name.to_owned())
        .unwrap_or_else(|| id.to_string())
}
