//! Trip lifecycle state.

use std::fmt;

use eco_core::{RouteId, Tick, TripId};

/// Lifecycle status of one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TripStatus {
    /// Candidates known, no active route yet.
    #[default]
    Planning,
    InProgress,
    /// The active route changed on the last tick.  Lasts exactly one tick.
    Rerouted,
    Arrived,
    Aborted,
}

impl TripStatus {
    /// `Arrived` and `Aborted` accept no further ticks.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TripStatus::Arrived | TripStatus::Aborted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TripStatus::Planning => "planning",
            TripStatus::InProgress => "in_progress",
            TripStatus::Rerouted => "rerouted",
            TripStatus::Arrived => "arrived",
            TripStatus::Aborted => "aborted",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of where a trip stands.
///
/// Owned by [`DecisionEngine`](crate::DecisionEngine) and mutated only by
/// its decision loop; callers get a shared reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripState {
    pub(crate) trip: TripId,
    pub(crate) status: TripStatus,
    pub(crate) active_route: Option<RouteId>,
    pub(crate) progress: f64,
    pub(crate) tick: Tick,
    pub(crate) elapsed_secs: u64,
}

impl TripState {
    pub(crate) fn new(trip: TripId) -> Self {
        Self {
            trip,
            status: TripStatus::Planning,
            active_route: None,
            progress: 0.0,
            tick: Tick::ZERO,
            elapsed_secs: 0,
        }
    }

    #[inline]
    pub fn trip(&self) -> TripId {
        self.trip
    }

    #[inline]
    pub fn status(&self) -> TripStatus {
        self.status
    }

    /// `None` only while planning, or if planning failed.
    #[inline]
    pub fn active_route(&self) -> Option<RouteId> {
        self.active_route
    }

    /// Fraction of the active route covered, in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// The tick of the most recent decision.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Simulated seconds since departure.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }
}
