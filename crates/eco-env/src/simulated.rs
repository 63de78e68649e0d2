//! Seeded, reproducible stand-in for live weather and traffic feeds.
//!
//! # Model
//!
//! Weather is decided per spatial cell and time epoch: in each epoch a cell
//! has a small chance of a weather event (rain and/or strong wind), and is
//! otherwise calm.  Traffic starts from the time-of-day estimate and has a
//! small chance of being one level lighter or heavier at any given place
//! and moment.
//!
//! Every draw is keyed by (seed, quantised location, timestamp), so sampling
//! the same pair twice always returns the same snapshot.

use eco_core::{ConditionSnapshot, GeoPoint, Reading, SeededRng, TrafficLevel};

use crate::traffic::{historical_estimate, hour_of};
use crate::{EnvError, EnvResult, EnvironmentProvider};

/// Precipitation intensities (mm/h) a weather event can bring.
const EVENT_PRECIPITATION_MM: [f64; 3] = [0.0, 5.0, 20.0];
/// Wind speeds (km/h) a weather event can bring.
const EVENT_WIND_KMH: [f64; 3] = [5.0, 15.0, 40.0];

/// Tunables for [`SimulatedEnvironment`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationProfile {
    /// Chance that a cell has a weather event during one epoch.
    pub weather_event_probability: f64,
    /// Length of a weather epoch in seconds.
    pub weather_epoch_secs: i64,
    /// Size of a weather cell in degrees.
    pub weather_cell_deg: f64,
    /// Chance that traffic deviates one level from the time-of-day estimate.
    pub traffic_shift_probability: f64,
    /// Size of a traffic cell in degrees.
    pub traffic_cell_deg: f64,
    /// Chance that a sample fails as if the feed were down.
    pub outage_probability: f64,
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            weather_event_probability: 0.05,
            weather_epoch_secs:        900,
            weather_cell_deg:          0.25,
            traffic_shift_probability: 0.05,
            traffic_cell_deg:          0.01,
            outage_probability:        0.0,
        }
    }
}

/// Deterministic pseudo-random environment source.
#[derive(Debug, Clone)]
pub struct SimulatedEnvironment {
    seed:    u64,
    profile: SimulationProfile,
}

impl SimulatedEnvironment {
    pub fn new(seed: u64) -> Self {
        Self::with_profile(seed, SimulationProfile::default())
    }

    pub fn with_profile(seed: u64, profile: SimulationProfile) -> Self {
        Self { seed, profile }
    }

    pub fn profile(&self) -> &SimulationProfile {
        &self.profile
    }

    fn weather(&self, location: GeoPoint, timestamp: i64) -> (f64, f64, f64, u16) {
        let cell = quantise(location, self.profile.weather_cell_deg);
        let epoch_secs = self.profile.weather_epoch_secs.max(1);
        let epoch_start = timestamp.div_euclid(epoch_secs) * epoch_secs;
        let mut rng = SeededRng::for_sample(self.seed, cell, epoch_start);

        let temperature = rng.gen_range(8.0..24.0);
        if rng.gen_bool(self.profile.weather_event_probability) {
            let precip = *rng.choose(&EVENT_PRECIPITATION_MM).unwrap_or(&0.0);
            let wind = *rng.choose(&EVENT_WIND_KMH).unwrap_or(&5.0);
            let code = match precip {
                p if p >= 20.0 => 65,
                p if p > 0.0   => 61,
                _              => 3,
            };
            (temperature, precip, wind, code)
        } else {
            let wind = rng.gen_range(0.0..12.0);
            let code = *rng.choose(&[0u16, 1, 2]).unwrap_or(&0);
            (temperature, 0.0, wind, code)
        }
    }

    fn traffic(&self, location: GeoPoint, timestamp: i64) -> TrafficLevel {
        let base = historical_estimate(hour_of(timestamp));
        let cell = quantise(location, self.profile.traffic_cell_deg);
        let mut rng = SeededRng::for_sample(self.seed.rotate_left(13), cell, timestamp);
        if !rng.gen_bool(self.profile.traffic_shift_probability) {
            return base;
        }
        let heavier = rng.gen_bool(0.5);
        match (base, heavier) {
            (TrafficLevel::Normal, true)    => TrafficLevel::Moderate,
            (TrafficLevel::Moderate, true)  => TrafficLevel::Heavy,
            (TrafficLevel::Moderate, false) => TrafficLevel::Normal,
            (TrafficLevel::Heavy, false)    => TrafficLevel::Moderate,
            (level, _)                      => level,
        }
    }
}

impl EnvironmentProvider for SimulatedEnvironment {
    fn sample(&self, location: GeoPoint, timestamp: i64) -> EnvResult<ConditionSnapshot> {
        if self.profile.outage_probability > 0.0 {
            let mut rng = SeededRng::for_sample(self.seed.rotate_left(29), location, timestamp);
            if rng.gen_bool(self.profile.outage_probability) {
                return Err(EnvError::Unavailable("simulated feed outage".into()));
            }
        }

        let (temperature, precip, wind, code) = self.weather(location, timestamp);
        Ok(ConditionSnapshot::new(location, timestamp)
            .with_traffic(Reading::Observed(self.traffic(location, timestamp)))
            .with_temperature(Reading::Observed(temperature))
            .with_precipitation(Reading::Observed(precip))
            .with_wind(Reading::Observed(wind))
            .with_weather_code(code))
    }
}

/// Snap `p` to the south-west corner of its `cell_deg` grid cell.
fn quantise(p: GeoPoint, cell_deg: f64) -> GeoPoint {
    if cell_deg <= 0.0 {
        return p;
    }
    GeoPoint::new((p.lat / cell_deg).floor() * cell_deg, (p.lon / cell_deg).floor() * cell_deg)
}
