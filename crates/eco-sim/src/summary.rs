use eco_core::{RouteId, TripId};
use eco_cost::CostBreakdown;
use eco_engine::{Decision, DecisionEvent, TripStatus};

/// Outcome of one trip, accumulated from its decision events.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSummary {
    pub trip: TripId,
    pub status: TripStatus,
    /// Decision cycles run, planning included.
    pub ticks: u64,
    pub switches: u32,
    pub degraded_ticks: u32,
    /// Every route the trip was on, in order.
    pub route_history: Vec<RouteId>,
    /// Last known cost of the active route.
    pub final_cost: Option<CostBreakdown>,
    pub elapsed_secs: u64,
    /// Why the trip was aborted, if it was.
    pub abort_reason: Option<String>,
}

impl TripSummary {
    pub fn new(trip: TripId) -> Self {
        Self {
            trip,
            status: TripStatus::Planning,
            ticks: 0,
            switches: 0,
            degraded_ticks: 0,
            route_history: Vec::new(),
            final_cost: None,
            elapsed_secs: 0,
            abort_reason: None,
        }
    }

    /// Fold one event into the summary.
    pub fn record(&mut self, event: &DecisionEvent) {
        self.status = event.status;
        match event.decision {
            Decision::Aborted => {}
            Decision::Switch { to, .. } => {
                self.ticks += 1;
                self.switches += 1;
                self.route_history.push(to);
            }
            Decision::Degraded => {
                self.ticks += 1;
                self.degraded_ticks += 1;
            }
            Decision::Continue | Decision::Arrived => self.ticks += 1,
        }
        if self.route_history.is_empty() {
            if let Some(route) = event.active_route {
                self.route_history.push(route);
            }
        }
        if event.cost.is_some() {
            self.final_cost = event.cost;
        }
    }

    /// `true` if the trip reached its destination.
    pub fn arrived(&self) -> bool {
        self.status == TripStatus::Arrived
    }
}
