use eco_core::{ConditionSnapshot, TrafficLevel};
use eco_route::RouteSummary;

use crate::{CostBreakdown, CostConfig, CostError, CostResult, CostTerms};

/// Confidence factor for fallback snapshots or snapshots with unknown readings.
pub const DEGRADED_INPUT_CONFIDENCE: f64 = 0.8;
/// Confidence factor under heavy traffic.
pub const HEAVY_TRAFFIC_CONFIDENCE: f64 = 0.9;

/// Scores routes against condition snapshots.
///
/// Holds only an immutable [`CostConfig`]; `score` takes `&self` and has no
/// side effects, so one model can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostModel {
    config: CostConfig,
}

impl CostModel {
    pub fn new(config: CostConfig) -> CostResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    /// Reduce `route` under `snapshot` to a [`CostBreakdown`].
    ///
    /// # Errors
    ///
    /// - [`CostError::InvalidRoute`] if the distance is not a positive finite
    ///   number, or ascent/duration are negative.
    /// - [`CostError::InvalidSnapshot`] if a field is absent or an observed
    ///   value is not a finite non-negative number.  `Unknown` readings are
    ///   accepted and scored as normal conditions.
    pub fn score(&self, route: &RouteSummary, snapshot: &ConditionSnapshot) -> CostResult<CostBreakdown> {
        check_route(route)?;
        let (traffic, precipitation_mm, wind_kmh) = read_snapshot(snapshot)?;
        let cfg = &self.config;

        let base_fuel = route.distance_km * cfg.fuel_rate_l_per_km;
        let elevation_penalty = (route.ascent_m / 100.0) * cfg.elevation_factor * base_fuel;
        let traffic_multiplier = cfg.traffic_multipliers.get(traffic);
        let weather_multiplier = self.weather_multiplier(precipitation_mm, wind_kmh);

        let fuel_liters = (base_fuel + elevation_penalty) * traffic_multiplier * weather_multiplier;
        let co2_kg = fuel_liters * cfg.co2_kg_per_liter;
        let monetary_cost = fuel_liters * cfg.fuel_price_per_liter;
        let time_min = route.duration_min / cfg.traffic_speed_factors.get(traffic);

        let w = &cfg.weights;
        let r = &cfg.reference;
        let total_cost =
            w.fuel * fuel_liters / r.fuel_liters + w.co2 * co2_kg / r.co2_kg + w.time * time_min / r.time_min;

        Ok(CostBreakdown {
            route: route.id,
            fuel_liters,
            co2_kg,
            monetary_cost,
            time_min,
            total_cost,
            terms: CostTerms {
                base_fuel_l: base_fuel,
                elevation_penalty_l: elevation_penalty,
                traffic_multiplier,
                weather_multiplier,
            },
            confidence: confidence(snapshot, traffic),
        })
    }

    fn weather_multiplier(&self, precipitation_mm: f64, wind_kmh: f64) -> f64 {
        let w = &self.config.weather;
        let mut multiplier = 1.0;
        if precipitation_mm > w.precipitation_threshold_mm {
            multiplier += w.precipitation_penalty;
        }
        if wind_kmh > w.wind_threshold_kmh {
            multiplier += w.wind_penalty;
        }
        multiplier
    }
}

fn check_route(route: &RouteSummary) -> CostResult<()> {
    let invalid = |reason: String| CostError::InvalidRoute { route: route.id, reason };
    if !route.distance_km.is_finite() || route.distance_km <= 0.0 {
        return Err(invalid(format!("distance must be positive, got {} km", route.distance_km)));
    }
    if !route.ascent_m.is_finite() || route.ascent_m < 0.0 {
        return Err(invalid(format!("ascent must be >= 0, got {} m", route.ascent_m)));
    }
    if !route.duration_min.is_finite() || route.duration_min < 0.0 {
        return Err(invalid(format!("duration must be >= 0, got {} min", route.duration_min)));
    }
    Ok(())
}

/// Pull the fields the formula needs, resolving `Unknown` to normal values.
fn read_snapshot(snapshot: &ConditionSnapshot) -> CostResult<(TrafficLevel, f64, f64)> {
    if let Some(field) = snapshot.first_missing() {
        return Err(CostError::InvalidSnapshot(format!("missing {field}")));
    }
    let missing = |field: &str| CostError::InvalidSnapshot(format!("missing {field}"));
    let traffic = snapshot.effective_traffic().ok_or_else(|| missing("traffic"))?;
    let precipitation = snapshot.effective_precipitation_mm().ok_or_else(|| missing("precipitation_mm"))?;
    let wind = snapshot.effective_wind_kmh().ok_or_else(|| missing("wind_kmh"))?;
    let temperature = snapshot.effective_temperature_c().ok_or_else(|| missing("temperature_c"))?;

    for (field, value) in [("precipitation_mm", precipitation), ("wind_kmh", wind)] {
        if !value.is_finite() || value < 0.0 {
            return Err(CostError::InvalidSnapshot(format!("{field} must be finite and >= 0, got {value}")));
        }
    }
    if !temperature.is_finite() {
        return Err(CostError::InvalidSnapshot(format!("temperature_c must be finite, got {temperature}")));
    }
    Ok((traffic, precipitation, wind))
}

fn confidence(snapshot: &ConditionSnapshot, traffic: TrafficLevel) -> f64 {
    let mut confidence = 1.0;
    if snapshot.is_fallback() || snapshot.has_unknown() {
        confidence *= DEGRADED_INPUT_CONFIDENCE;
    }
    if traffic == TrafficLevel::Heavy {
        confidence *= HEAVY_TRAFFIC_CONFIDENCE;
    }
    confidence
}
