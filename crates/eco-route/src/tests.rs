//! Unit tests for eco-route.

use eco_core::{GeoPoint, RouteId};

use crate::RouteSummary;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn origin() -> GeoPoint {
    GeoPoint::new(40.0, -74.0)
}

fn destination() -> GeoPoint {
    GeoPoint::new(41.0, -74.0)
}

/// Route from origin to destination bending through `(40.5, mid_lon)`.
fn route(id: u32, distance_km: f64, mid_lon: f64) -> RouteSummary {
    RouteSummary::new(
        RouteId(id),
        vec![origin(), GeoPoint::new(40.5, mid_lon), destination()],
        distance_km,
        distance_km, // 60 km/h
    )
}

#[cfg(test)]
mod route_summary {
    use super::*;

    #[test]
    fn validate_rejects_non_positive_distance() {
        assert!(route(0, 0.0, -74.0).validate().is_err());
        assert!(route(0, -3.0, -74.0).validate().is_err());
        assert!(route(0, f64::NAN, -74.0).validate().is_err());
        assert!(route(0, 120.0, -74.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_single_waypoint() {
        let r = RouteSummary::new(RouteId(0), vec![origin()], 10.0, 10.0);
        assert!(r.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_ascent() {
        let r = route(0, 100.0, -74.0).with_elevation(-1.0, 0.0);
        assert!(r.validate().is_err());
    }

    #[test]
    fn position_at_endpoints_and_middle() {
        let r = route(0, 120.0, -74.0);
        assert_eq!(r.position_at(0.0), origin());
        let end = r.position_at(1.0);
        assert!(end.distance_km(destination()) < 1e-6);
        let mid = r.midpoint();
        assert!(mid.distance_km(GeoPoint::new(40.5, -74.0)) < 0.01, "got {mid}");
    }

    #[test]
    fn position_at_clamps_progress() {
        let r = route(0, 120.0, -74.0);
        assert_eq!(r.position_at(-0.5), origin());
        assert!(r.position_at(7.0).distance_km(destination()) < 1e-6);
    }

    #[test]
    fn near_identical_needs_distance_and_geometry() {
        let a = route(0, 120.0, -74.0);
        let same = route(1, 120.2, -74.001);
        let other_path = route(2, 120.0, -73.5);
        let other_len = route(3, 130.0, -74.0);
        assert!(a.near_identical(&same, 0.5));
        assert!(!a.near_identical(&other_path, 0.5));
        assert!(!a.near_identical(&other_len, 0.5));
    }
}

#[cfg(test)]
mod elevation {
    use super::*;
    use crate::{ElevationSource, RouteError, RouteResult, annotate_elevation, ascent_descent, sample_indices};

    struct Profile(Vec<f64>);
    impl ElevationSource for Profile {
        fn elevations(&self, points: &[GeoPoint]) -> RouteResult<Vec<f64>> {
            Ok(self.0.iter().copied().take(points.len()).collect())
        }
    }

    struct Offline;
    impl ElevationSource for Offline {
        fn elevations(&self, _points: &[GeoPoint]) -> RouteResult<Vec<f64>> {
            Err(RouteError::ElevationUnavailable("timeout".into()))
        }
    }

    #[test]
    fn sample_indices_includes_last_point() {
        assert_eq!(sample_indices(10, 5), vec![0, 2, 4, 6, 8, 9]);
        assert_eq!(sample_indices(3, 5), vec![0, 1, 2]);
        assert_eq!(sample_indices(5, 5), vec![0, 1, 2, 3, 4]);
        assert!(sample_indices(1, 5).is_empty());
    }

    #[test]
    fn ascent_and_descent_are_summed_separately() {
        let (up, down) = ascent_descent(&[100.0, 150.0, 120.0, 200.0]);
        assert_eq!(up, 130.0);
        assert_eq!(down, 30.0);
        assert_eq!(ascent_descent(&[42.0]), (0.0, 0.0));
    }

    #[test]
    fn annotate_uses_profile() {
        let r = annotate_elevation(route(0, 120.0, -74.0), &Profile(vec![10.0, 60.0, 20.0]));
        assert_eq!(r.ascent_m, 50.0);
        assert_eq!(r.descent_m, 40.0);
    }

    #[test]
    fn annotate_falls_back_to_flat() {
        let r = route(0, 120.0, -74.0).with_elevation(300.0, 300.0);
        let r = annotate_elevation(r, &Offline);
        assert_eq!((r.ascent_m, r.descent_m), (0.0, 0.0));

        let r = annotate_elevation(route(1, 120.0, -74.0), &Profile(vec![10.0]));
        assert_eq!((r.ascent_m, r.descent_m), (0.0, 0.0));
    }
}

#[cfg(test)]
mod providers {
    use super::*;
    use crate::{RoutingProvider, StaticRouter, StraightLineRouter};

    #[test]
    fn straight_line_applies_detour() {
        let routes = StraightLineRouter::default()
            .fetch_routes(origin(), destination())
            .unwrap();
        assert_eq!(routes.len(), 1);
        let r = &routes[0];
        let crow = origin().distance_km(destination());
        assert!((r.distance_km - crow * 1.2).abs() < 1e-9);
        // 60 km/h → minutes equal kilometres.
        assert!((r.duration_min - r.distance_km).abs() < 1e-9);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn static_router_returns_its_routes() {
        let router = StaticRouter::new(vec![route(0, 100.0, -74.0), route(1, 110.0, -73.0)]);
        let got = router.fetch_routes(origin(), destination()).unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].id, RouteId(1));
    }
}

#[cfg(test)]
mod candidate_set {
    use super::*;
    use crate::{CandidateSet, MAX_CANDIDATES, RouteError, RouteResult, RoutingProvider, StaticRouter};

    #[test]
    fn keeps_insertion_order() {
        let set = CandidateSet::from_routes(
            origin(),
            destination(),
            vec![route(2, 130.0, -73.0), route(0, 110.0, -74.0), route(1, 120.0, -75.0)],
        )
        .unwrap();
        let ids: Vec<_> = set.ids().collect();
        assert_eq!(ids, [RouteId(2), RouteId(0), RouteId(1)]);
        assert_eq!(set.position(RouteId(0)), Some(1));
    }

    #[test]
    fn drops_near_identical_routes() {
        let set = CandidateSet::from_routes(
            origin(),
            destination(),
            vec![route(0, 120.0, -74.0), route(1, 120.1, -74.0), route(2, 150.0, -73.0)],
        )
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(RouteId(0)));
        assert!(!set.contains(RouteId(1)));
    }

    #[test]
    fn caps_at_max_candidates() {
        let routes = (0..5).map(|i| route(i, 100.0 + 10.0 * i as f64, -74.0 + i as f64 * 0.3)).collect();
        let set = CandidateSet::from_routes(origin(), destination(), routes).unwrap();
        assert_eq!(set.len(), MAX_CANDIDATES);
    }

    #[test]
    fn never_synthesises_alternatives() {
        let set = CandidateSet::from_routes(origin(), destination(), vec![route(0, 120.0, -74.0)]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_is_an_error() {
        let err = CandidateSet::from_routes(origin(), destination(), vec![]).unwrap_err();
        assert_eq!(err, RouteError::Empty);
    }

    #[test]
    fn invalid_route_is_fatal() {
        let err = CandidateSet::from_routes(
            origin(),
            destination(),
            vec![route(0, 120.0, -74.0), route(1, 0.0, -73.0)],
        )
        .unwrap_err();
        assert!(matches!(err, RouteError::InvalidRoute { route, .. } if route == RouteId(1)));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = CandidateSet::from_routes(
            origin(),
            destination(),
            vec![route(0, 120.0, -74.0), route(0, 150.0, -73.0)],
        )
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicateId(RouteId(0)));
    }

    #[test]
    fn get_missing_is_not_found() {
        let set = CandidateSet::from_routes(origin(), destination(), vec![route(0, 120.0, -74.0)]).unwrap();
        assert_eq!(set.get(RouteId(9)).unwrap_err(), RouteError::NotFound(RouteId(9)));
        assert_eq!(set.get(RouteId(0)).unwrap().distance_km, 120.0);
    }

    #[test]
    fn fetch_goes_through_provider() {
        let router = StaticRouter::new(vec![route(0, 120.0, -74.0), route(1, 140.0, -73.0)]);
        let set = CandidateSet::fetch(&router, origin(), destination()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.origin(), origin());
    }

    #[test]
    fn refresh_keeps_active_route_even_when_missing_upstream() {
        let set = CandidateSet::from_routes(
            origin(),
            destination(),
            vec![route(0, 120.0, -74.0), route(1, 140.0, -73.0)],
        )
        .unwrap();
        // Upstream now returns three different paths; route 0's id is reused.
        let router = StaticRouter::new(vec![
            route(0, 200.0, -72.0),
            route(5, 210.0, -72.5),
            route(6, 220.0, -75.5),
        ]);
        let refreshed = set.refreshed(&router, RouteId(0)).unwrap();
        assert_eq!(refreshed.len(), MAX_CANDIDATES);
        let kept = refreshed.get(RouteId(0)).unwrap();
        assert_eq!(kept.distance_km, 120.0, "kept route attributes must not change");
    }

    #[test]
    fn refresh_substitutes_matching_fresh_route() {
        let set = CandidateSet::from_routes(origin(), destination(), vec![route(3, 120.0, -74.0)]).unwrap();
        let router = StaticRouter::new(vec![route(0, 150.0, -73.0), route(1, 120.1, -74.0)]);
        let refreshed = set.refreshed(&router, RouteId(3)).unwrap();
        let ids: Vec<_> = refreshed.ids().collect();
        assert_eq!(ids, [RouteId(0), RouteId(3)]);
    }

    #[test]
    fn refresh_propagates_collaborator_failure() {
        struct Down;
        impl RoutingProvider for Down {
            fn fetch_routes(&self, _o: GeoPoint, _d: GeoPoint) -> RouteResult<Vec<RouteSummary>> {
                Err(RouteError::Unavailable("503".into()))
            }
        }
        let set = CandidateSet::from_routes(origin(), destination(), vec![route(0, 120.0, -74.0)]).unwrap();
        assert!(matches!(set.refreshed(&Down, RouteId(0)), Err(RouteError::Unavailable(_))));
    }
}
