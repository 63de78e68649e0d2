//! The output of one scoring call.

use eco_core::RouteId;

/// The weighted terms that produced a [`CostBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostTerms {
    /// Distance-only fuel, in litres.
    pub base_fuel_l: f64,
    /// Extra fuel for climbing, in litres.
    pub elevation_penalty_l: f64,
    pub traffic_multiplier: f64,
    pub weather_multiplier: f64,
}

/// Cost of one route under one snapshot.
///
/// Derived data: it only has meaning together with the route and snapshot
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    pub route: RouteId,
    pub fuel_liters: f64,
    pub co2_kg: f64,
    pub monetary_cost: f64,
    /// Expected travel time under the snapshot's traffic, in minutes.
    pub time_min: f64,
    /// The single comparable figure.  Lower is better.
    pub total_cost: f64,
    pub terms: CostTerms,
    /// How much the inputs can be trusted, in `(0, 1]`.
    pub confidence: f64,
}
