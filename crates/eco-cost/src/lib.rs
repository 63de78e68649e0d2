//! `eco-cost` — the cost model.
//!
//! [`CostModel::score`] is a pure function of a [`RouteSummary`] and a
//! [`ConditionSnapshot`]: no I/O, no hidden state, identical inputs always
//! give an identical [`CostBreakdown`].  The decision engine calls it once
//! per candidate per tick.
//!
//! # Formula
//!
//! ```text
//! base_fuel          = distance_km × fuel_rate
//! elevation_penalty  = (ascent_m / 100) × elevation_factor × base_fuel
//! traffic_multiplier = table[traffic]                 (1.0 / 1.25 / 1.6)
//! weather_multiplier = 1.0 + rain_penalty? + wind_penalty?
//! total_fuel         = (base_fuel + elevation_penalty) × traffic × weather
//! co2                = total_fuel × co2_per_liter
//! money              = total_fuel × fuel_price
//! time               = duration_min / speed_factor[traffic]
//! total_cost         = w_fuel·fuel/ref_fuel + w_co2·co2/ref_co2 + w_time·time/ref_time
//! ```
//!
//! Descent is ignored for fuel purposes.
//!
//! [`RouteSummary`]: eco_route::RouteSummary
//! [`ConditionSnapshot`]: eco_core::ConditionSnapshot

pub mod breakdown;
pub mod config;
pub mod error;
pub mod explain;
pub mod model;
pub mod rank;


pub use breakdown::{CostBreakdown, CostTerms};
pub use config::{CostConfig, CostWeights, Normalisation, TrafficTable, WeatherPenalties};
pub use error::{CostError, CostResult};
pub use explain::{FLAT_TERRAIN_MAX_ASCENT_M, Factor, RouteExplanation, explain};
pub use model::{CostModel, DEGRADED_INPUT_CONFIDENCE, HEAVY_TRAFFIC_CONFIDENCE};
pub use rank::{RouteRole, ScoredRoute, best, compare, label_roles, rank};
