//! Per-tick output of the engine.

use std::fmt;

use eco_core::{RouteId, Tick, TripId};
use eco_cost::CostBreakdown;

use crate::TripStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Decision {
    /// Keep the active route.
    Continue,
    /// The active route changed.
    Switch { from: RouteId, to: RouteId },
    Arrived,
    /// Decided on stale or partial data; the active route was kept.
    Degraded,
    Aborted,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Continue => "continue",
            Decision::Switch { .. } => "switch",
            Decision::Arrived => "arrived",
            Decision::Degraded => "degraded",
            Decision::Aborted => "aborted",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Switch { from, to } => write!(f, "switch {from} -> {to}"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// One event per tick, delivered to the trip observer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionEvent {
    pub trip: TripId,
    pub tick: Tick,
    pub decision: Decision,
    /// Status after the decision was applied.
    pub status: TripStatus,
    pub active_route: Option<RouteId>,
    pub progress: f64,
    /// Cost of the active route under this tick's snapshot, if it could be
    /// scored.  Arrival and abort events repeat the last known cost.
    pub cost: Option<CostBreakdown>,
}
