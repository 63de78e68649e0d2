//! Tunable constants for the cost model.
//!
//! Passed into [`CostModel::new`](crate::CostModel::new) as a value, so two
//! trips can run with different tunings side by side.

use eco_core::TrafficLevel;

use crate::{CostError, CostResult};

/// One value per [`TrafficLevel`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficTable {
    pub normal: f64,
    pub moderate: f64,
    pub heavy: f64,
}

impl TrafficTable {
    #[inline]
    pub fn get(&self, level: TrafficLevel) -> f64 {
        match level {
            TrafficLevel::Normal => self.normal,
            TrafficLevel::Moderate => self.moderate,
            TrafficLevel::Heavy => self.heavy,
        }
    }

    fn values(&self) -> [f64; 3] {
        [self.normal, self.moderate, self.heavy]
    }
}

/// Additive weather surcharges on top of a multiplier of 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeatherPenalties {
    /// Precipitation strictly above this (mm) adds `precipitation_penalty`.
    pub precipitation_threshold_mm: f64,
    pub precipitation_penalty: f64,
    /// Wind strictly above this (km/h) adds `wind_penalty`.
    pub wind_threshold_kmh: f64,
    pub wind_penalty: f64,
}

impl Default for WeatherPenalties {
    fn default() -> Self {
        Self {
            precipitation_threshold_mm: 0.0,
            precipitation_penalty: 0.10,
            wind_threshold_kmh: 25.0,
            wind_penalty: 0.05,
        }
    }
}

/// Weights of the three normalised terms in `total_cost`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostWeights {
    pub fuel: f64,
    pub co2: f64,
    pub time: f64,
}

impl Default for CostWeights {
    /// Fuel and CO2 dominate raw time.
    fn default() -> Self {
        Self { fuel: 0.4, co2: 0.4, time: 0.2 }
    }
}

/// Reference magnitudes that each term is divided by before weighting.
///
/// The defaults describe 100 km of flat driving in free-flowing traffic:
/// 8 L of fuel, 18.48 kg of CO2 and one hour at the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Normalisation {
    pub fuel_liters: f64,
    pub co2_kg: f64,
    pub time_min: f64,
}

impl Default for Normalisation {
    fn default() -> Self {
        Self { fuel_liters: 8.0, co2_kg: 18.48, time_min: 60.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostConfig {
    /// Litres per km on flat ground.
    pub fuel_rate_l_per_km: f64,
    /// Fraction of base fuel added per 100 m of ascent.
    pub elevation_factor: f64,
    pub co2_kg_per_liter: f64,
    pub fuel_price_per_liter: f64,
    /// Fuel multiplier per traffic level.
    pub traffic_multipliers: TrafficTable,
    /// Fraction of nominal speed achieved per traffic level.
    pub traffic_speed_factors: TrafficTable,
    pub weather: WeatherPenalties,
    pub weights: CostWeights,
    pub reference: Normalisation,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            fuel_rate_l_per_km: 0.08,
            elevation_factor: 0.15,
            co2_kg_per_liter: 2.31,
            fuel_price_per_liter: 1.50,
            traffic_multipliers: TrafficTable { normal: 1.0, moderate: 1.25, heavy: 1.6 },
            traffic_speed_factors: TrafficTable { normal: 1.0, moderate: 0.75, heavy: 0.5 },
            weather: WeatherPenalties::default(),
            weights: CostWeights::default(),
            reference: Normalisation::default(),
        }
    }
}

impl CostConfig {
    /// Reject configurations under which scores would be meaningless or
    /// under which heavier traffic could score cheaper than lighter traffic.
    pub fn validate(&self) -> CostResult<()> {
        let non_negative = [
            ("fuel_rate_l_per_km", self.fuel_rate_l_per_km),
            ("elevation_factor", self.elevation_factor),
            ("co2_kg_per_liter", self.co2_kg_per_liter),
            ("fuel_price_per_liter", self.fuel_price_per_liter),
            ("weather.precipitation_threshold_mm", self.weather.precipitation_threshold_mm),
            ("weather.precipitation_penalty", self.weather.precipitation_penalty),
            ("weather.wind_threshold_kmh", self.weather.wind_threshold_kmh),
            ("weather.wind_penalty", self.weather.wind_penalty),
            ("weights.fuel", self.weights.fuel),
            ("weights.co2", self.weights.co2),
            ("weights.time", self.weights.time),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CostError::Config(format!("{name} must be finite and >= 0, got {value}")));
            }
        }
        if self.fuel_rate_l_per_km == 0.0 {
            return Err(CostError::Config("fuel_rate_l_per_km must be > 0".into()));
        }
        if self.weights.fuel + self.weights.co2 + self.weights.time == 0.0 {
            return Err(CostError::Config("at least one weight must be > 0".into()));
        }

        let refs = [
            ("reference.fuel_liters", self.reference.fuel_liters),
            ("reference.co2_kg", self.reference.co2_kg),
            ("reference.time_min", self.reference.time_min),
        ];
        for (name, value) in refs {
            if !value.is_finite() || value <= 0.0 {
                return Err(CostError::Config(format!("{name} must be finite and > 0, got {value}")));
            }
        }

        let m = self.traffic_multipliers.values();
        if m.iter().any(|v| !v.is_finite() || *v <= 0.0) || !(m[0] <= m[1] && m[1] <= m[2]) {
            return Err(CostError::Config(format!(
                "traffic_multipliers must be positive and non-decreasing Normal -> Heavy, got {m:?}"
            )));
        }
        let s = self.traffic_speed_factors.values();
        if s.iter().any(|v| !v.is_finite() || *v <= 0.0 || *v > 1.0) || !(s[0] >= s[1] && s[1] >= s[2]) {
            return Err(CostError::Config(format!(
                "traffic_speed_factors must lie in (0, 1] and not increase Normal -> Heavy, got {s:?}"
            )));
        }
        Ok(())
    }
}
