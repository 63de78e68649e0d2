//! Unit tests for eco-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RouteId, TripId};

    #[test]
    fn ordering() {
        assert!(RouteId(0) < RouteId(1));
        assert!(TripId(100) > TripId(99));
    }

    #[test]
    fn display() {
        assert_eq!(RouteId(7).to_string(), "route#7");
        assert_eq!(TripId(3).to_string(), "trip#3");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(40.7128, -74.0060);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(40.0, -74.0);
        let b = GeoPoint::new(41.0, -74.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn nyc_to_boston() {
        let nyc = GeoPoint::new(40.7128, -74.0060);
        let bos = GeoPoint::new(42.3601, -71.0589);
        let d = nyc.distance_km(bos);
        assert!((d - 306.0).abs() < 3.0, "got {d}");
    }

    #[test]
    fn lerp_clamps() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(5.0, 10.0));
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(40.0, -74.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}

#[cfg(test)]
mod time {
    use crate::{Tick, TripClock, TripConfig};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).next(), Tick(4));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(1).since(Tick(10)), 0);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = TripClock::new(1_000, 300);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 600);
        assert_eq!(clock.current_unix_secs(), 1_600);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn hour_of_day() {
        // 08:30 UTC on day 0.
        let clock = TripClock::new(8 * 3_600 + 1_800, 60);
        assert_eq!(clock.hour_of_day(), 8);
    }

    #[test]
    fn config_validation() {
        assert!(TripConfig::default().validate().is_ok());
        let bad = TripConfig { tick_duration_secs: 0, ..TripConfig::default() };
        assert!(bad.validate().is_err());
        let bad = TripConfig { max_ticks: 0, ..TripConfig::default() };
        assert!(bad.validate().is_err());
    }
}

#[cfg(test)]
mod traffic {
    use crate::TrafficLevel;

    #[test]
    fn ordered_light_to_heavy() {
        assert!(TrafficLevel::Normal < TrafficLevel::Moderate);
        assert!(TrafficLevel::Moderate < TrafficLevel::Heavy);
    }

    #[test]
    fn parse_labels() {
        assert_eq!("Heavy".parse::<TrafficLevel>().unwrap(), TrafficLevel::Heavy);
        assert_eq!(" normal ".parse::<TrafficLevel>().unwrap(), TrafficLevel::Normal);
        assert!("gridlock".parse::<TrafficLevel>().is_err());
    }
}

#[cfg(test)]
mod conditions {
    use crate::conditions::NORMAL_TEMPERATURE_C;
    use crate::{ConditionSnapshot, GeoPoint, Reading, TrafficLevel};

    fn here() -> GeoPoint {
        GeoPoint::new(40.7, -74.0)
    }

    #[test]
    fn observed_is_complete() {
        let s = ConditionSnapshot::observed(here(), 0, TrafficLevel::Heavy, 20.0, 1.0, 10.0);
        assert_eq!(s.first_missing(), None);
        assert!(!s.has_unknown());
        assert_eq!(s.effective_traffic(), Some(TrafficLevel::Heavy));
    }

    #[test]
    fn empty_reports_first_missing_field() {
        let s = ConditionSnapshot::new(here(), 0);
        assert_eq!(s.first_missing(), Some("traffic"));
        let s = s.with_traffic(Reading::Observed(TrafficLevel::Normal));
        assert_eq!(s.first_missing(), Some("temperature_c"));
    }

    #[test]
    fn unknown_resolves_to_normal_defaults() {
        let s = ConditionSnapshot::unknown(here(), 0);
        assert_eq!(s.first_missing(), None);
        assert!(s.has_unknown());
        assert_eq!(s.effective_traffic(), Some(TrafficLevel::Normal));
        assert_eq!(s.effective_precipitation_mm(), Some(0.0));
        assert_eq!(s.effective_temperature_c(), Some(NORMAL_TEMPERATURE_C));
    }
}

#[cfg(test)]
mod rng {
    use crate::{GeoPoint, SeededRng};

    #[test]
    fn same_sample_key_same_stream() {
        let p = GeoPoint::new(41.0, -73.0);
        let mut a = SeededRng::for_sample(7, p, 3_600);
        let mut b = SeededRng::for_sample(7, p, 3_600);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn different_timestamps_diverge() {
        let p = GeoPoint::new(41.0, -73.0);
        let mut a = SeededRng::for_sample(7, p, 0);
        let mut b = SeededRng::for_sample(7, p, 300);
        let xs: Vec<u64> = (0..8).map(|_| a.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }
}
