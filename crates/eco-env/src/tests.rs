//! Unit tests for eco-env.

use eco_core::{GeoPoint, TrafficLevel};

fn here() -> GeoPoint {
    GeoPoint::new(41.3, -72.9)
}

#[cfg(test)]
mod traffic {
    use super::*;
    use crate::{historical_estimate, infer_from_speed};

    #[test]
    fn slow_routes_are_congested() {
        // 10 km in 1 h → 10 km/h.
        assert_eq!(infer_from_speed(10.0, 3_600.0), TrafficLevel::Heavy);
        // 30 km in 1 h.
        assert_eq!(infer_from_speed(30.0, 3_600.0), TrafficLevel::Moderate);
        // 90 km in 1 h.
        assert_eq!(infer_from_speed(90.0, 3_600.0), TrafficLevel::Normal);
    }

    #[test]
    fn degenerate_inputs_are_normal() {
        assert_eq!(infer_from_speed(0.0, 3_600.0), TrafficLevel::Normal);
        assert_eq!(infer_from_speed(10.0, 0.0), TrafficLevel::Normal);
        assert_eq!(infer_from_speed(f64::NAN, 10.0), TrafficLevel::Normal);
    }

    #[test]
    fn rush_hours() {
        for h in [8, 9, 17, 18] {
            assert_eq!(historical_estimate(h), TrafficLevel::Heavy, "hour {h}");
        }
        for h in [7, 10, 16, 19] {
            assert_eq!(historical_estimate(h), TrafficLevel::Moderate, "hour {h}");
        }
        for h in [0, 3, 12, 14, 23] {
            assert_eq!(historical_estimate(h), TrafficLevel::Normal, "hour {h}");
        }
    }
}

#[cfg(test)]
mod weather {
    use crate::weather_label;

    #[test]
    fn known_and_unknown_codes() {
        assert_eq!(weather_label(0), "Clear");
        assert_eq!(weather_label(48), "Foggy");
        assert_eq!(weather_label(95), "Thunderstorm");
        assert_eq!(weather_label(42), "Unknown");
    }
}

#[cfg(test)]
mod providers {
    use super::*;
    use eco_core::ConditionSnapshot;

    use crate::{EnvError, EnvResult, EnvironmentProvider, FallbackEnvironment, FixedEnvironment, FnEnvironment};

    #[test]
    fn fixed_returns_complete_snapshot_at_request_point() {
        let env = FixedEnvironment { traffic: TrafficLevel::Heavy, ..FixedEnvironment::calm() };
        let s = env.sample(here(), 1_234).unwrap();
        assert_eq!(s.location(), here());
        assert_eq!(s.timestamp(), 1_234);
        assert_eq!(s.first_missing(), None);
        assert_eq!(s.effective_traffic(), Some(TrafficLevel::Heavy));
    }

    #[test]
    fn fn_environment_delegates() {
        let env = FnEnvironment(|loc: GeoPoint, ts: i64| -> EnvResult<ConditionSnapshot> {
            Ok(ConditionSnapshot::unknown(loc, ts))
        });
        let s = env.sample(here(), 5).unwrap();
        assert!(s.has_unknown());
    }

    #[test]
    fn fallback_passes_through_success() {
        let env = FallbackEnvironment::new(FixedEnvironment::calm());
        let s = env.sample(here(), 0).unwrap();
        assert!(!s.is_fallback());
    }

    #[test]
    fn fallback_masks_failure() {
        let down = FnEnvironment(|_: GeoPoint, _: i64| -> EnvResult<ConditionSnapshot> {
            Err(EnvError::Timeout { after_ms: 3_000 })
        });
        let env = FallbackEnvironment::new(down);
        // 08:00 UTC → rush hour.
        let s = env.sample(here(), 8 * 3_600).unwrap();
        assert!(s.is_fallback());
        assert_eq!(s.first_missing(), None);
        assert_eq!(s.effective_traffic(), Some(TrafficLevel::Heavy));
        assert_eq!(s.effective_wind_kmh(), Some(5.0));
    }
}

#[cfg(test)]
mod simulated {
    use super::*;
    use crate::{EnvironmentProvider, SimulatedEnvironment, SimulationProfile};

    #[test]
    fn idempotent_for_fixed_pair() {
        let env = SimulatedEnvironment::new(11);
        for ts in [0, 300, 7_200, 86_000] {
            assert_eq!(env.sample(here(), ts).unwrap(), env.sample(here(), ts).unwrap());
        }
    }

    #[test]
    fn snapshots_are_complete() {
        let env = SimulatedEnvironment::new(3);
        for i in 0..50 {
            let s = env.sample(here(), i * 600).unwrap();
            assert_eq!(s.first_missing(), None);
            assert!(s.weather_code().is_some());
        }
    }

    #[test]
    fn weather_events_follow_probability() {
        let always = SimulationProfile { weather_event_probability: 1.0, ..SimulationProfile::default() };
        let env = SimulatedEnvironment::with_profile(5, always);
        let mut windy_or_wet = 0;
        for i in 0..40 {
            let s = env.sample(here(), i * 900).unwrap();
            let wind = s.effective_wind_kmh().unwrap();
            let rain = s.effective_precipitation_mm().unwrap();
            assert!([5.0, 15.0, 40.0].contains(&wind), "wind {wind}");
            assert!([0.0, 5.0, 20.0].contains(&rain), "rain {rain}");
            if wind > 5.0 || rain > 0.0 {
                windy_or_wet += 1;
            }
        }
        assert!(windy_or_wet > 0);

        let never = SimulationProfile { weather_event_probability: 0.0, ..SimulationProfile::default() };
        let env = SimulatedEnvironment::with_profile(5, never);
        for i in 0..40 {
            let s = env.sample(here(), i * 900).unwrap();
            assert_eq!(s.effective_precipitation_mm(), Some(0.0));
        }
    }

    #[test]
    fn traffic_tracks_time_of_day_without_shifts() {
        let steady = SimulationProfile { traffic_shift_probability: 0.0, ..SimulationProfile::default() };
        let env = SimulatedEnvironment::with_profile(1, steady);
        assert_eq!(env.sample(here(), 8 * 3_600).unwrap().effective_traffic(), Some(TrafficLevel::Heavy));
        assert_eq!(env.sample(here(), 13 * 3_600).unwrap().effective_traffic(), Some(TrafficLevel::Normal));
    }

    #[test]
    fn full_outage_always_fails() {
        let down = SimulationProfile { outage_probability: 1.0, ..SimulationProfile::default() };
        let env = SimulatedEnvironment::with_profile(1, down);
        assert!(env.sample(here(), 0).is_err());
    }
}
