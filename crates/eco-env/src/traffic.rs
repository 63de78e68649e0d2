//! Traffic level inference for sources without a live traffic feed.

use eco_core::TrafficLevel;

/// Average speed below which traffic is `Heavy`, in km/h.
pub const HEAVY_BELOW_KMH: f64 = 20.0;
/// Average speed below which traffic is `Moderate`, in km/h.
pub const MODERATE_BELOW_KMH: f64 = 40.0;

/// Infer traffic from the travel time a routing engine reports.
///
/// A slow average speed for the distance means the router already knows
/// about congestion.  Non-positive inputs carry no information and map to
/// `Normal`.
pub fn infer_from_speed(distance_km: f64, duration_secs: f64) -> TrafficLevel {
    if !(distance_km > 0.0 && duration_secs > 0.0) {
        return TrafficLevel::Normal;
    }
    let avg_kmh = distance_km / (duration_secs / 3_600.0);
    if avg_kmh < HEAVY_BELOW_KMH {
        TrafficLevel::Heavy
    } else if avg_kmh < MODERATE_BELOW_KMH {
        TrafficLevel::Moderate
    } else {
        TrafficLevel::Normal
    }
}

/// Typical traffic for an hour of day (0–23): rush hours are heavy, their
/// shoulders moderate.
pub fn historical_estimate(hour: u32) -> TrafficLevel {
    match hour {
        8 | 9 | 17 | 18  => TrafficLevel::Heavy,
        7 | 10 | 16 | 19 => TrafficLevel::Moderate,
        _                => TrafficLevel::Normal,
    }
}

/// Hour of day (UTC) for a Unix timestamp.
pub(crate) fn hour_of(timestamp: i64) -> u32 {
    (timestamp.rem_euclid(86_400) / 3_600) as u32
}
