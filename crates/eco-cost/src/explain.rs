//! Human-readable reasons for a route choice.

use std::fmt;

use eco_core::RouteId;

use crate::ScoredRoute;

/// Ascent below which a route counts as flat.
pub const FLAT_TERRAIN_MAX_ASCENT_M: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Factor {
    /// No traffic surcharge on the chosen route.
    OptimalTrafficFlow,
    /// Little climbing on the chosen route.
    FlatTerrain,
    /// Nothing stands out; the route wins on the weighted balance.
    BalancedTradeOff,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Factor::OptimalTrafficFlow => "optimal traffic flow",
            Factor::FlatTerrain => "flat terrain",
            Factor::BalancedTradeOff => "best balance of fuel, emissions and time",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteExplanation {
    pub route: RouteId,
    pub factors: Vec<Factor>,
    /// Total-cost advantage over the next best route, or 0 without one.
    pub savings: f64,
    /// Fuel saved against the next best route, in litres.
    pub fuel_saved_l: f64,
    pub confidence_pct: u32,
}

impl fmt::Display for RouteExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons: Vec<String> = self.factors.iter().map(ToString::to_string).collect();
        write!(f, "{} selected for {}", self.route, reasons.join(" and "))?;
        if self.savings > 0.0 {
            write!(f, "; saves {:.3} cost units ({:.2} L fuel) over the next best", self.savings, self.fuel_saved_l)?;
        }
        write!(f, " (confidence {}%)", self.confidence_pct)
    }
}

/// Explain why `selected` won over `others`.  `others` may include
/// `selected` itself; it is skipped when looking for the next best.
pub fn explain(selected: &ScoredRoute, others: &[ScoredRoute]) -> RouteExplanation {
    let mut factors = Vec::new();
    if selected.cost.terms.traffic_multiplier <= 1.0 {
        factors.push(Factor::OptimalTrafficFlow);
    }
    if selected.ascent_m < FLAT_TERRAIN_MAX_ASCENT_M {
        factors.push(Factor::FlatTerrain);
    }
    if factors.is_empty() {
        factors.push(Factor::BalancedTradeOff);
    }

    let runner_up = others
        .iter()
        .filter(|s| s.id != selected.id)
        .min_by(|a, b| crate::compare(a, b));
    let (savings, fuel_saved_l) = runner_up
        .map(|r| {
            (
                (r.cost.total_cost - selected.cost.total_cost).max(0.0),
                (r.cost.fuel_liters - selected.cost.fuel_liters).max(0.0),
            )
        })
        .unwrap_or((0.0, 0.0));

    RouteExplanation {
        route: selected.id,
        factors,
        savings,
        fuel_saved_l,
        confidence_pct: (selected.cost.confidence * 100.0).round() as u32,
    }
}
