//! Plain data row types written by output backends.

use eco_core::TripClock;
use eco_engine::{Decision, DecisionEvent};
use eco_sim::TripSummary;

/// One decision event, flattened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRow {
    pub trip_id:        u32,
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub decision:       &'static str,
    pub status:         &'static str,
    /// `None` before a route is selected.
    pub active_route:   Option<u32>,
    /// The previous route on a switch.
    pub switched_from:  Option<u32>,
    pub progress:       f64,
    pub total_cost:     Option<f64>,
    pub fuel_liters:    Option<f64>,
    pub co2_kg:         Option<f64>,
    pub confidence:     Option<f64>,
}

impl DecisionRow {
    pub fn from_event(event: &DecisionEvent, clock: &TripClock) -> Self {
        let switched_from = match event.decision {
            Decision::Switch { from, .. } => Some(from.get()),
            _ => None,
        };
        Self {
            trip_id:        event.trip.get(),
            tick:           event.tick.0,
            unix_time_secs: clock.start_unix_secs + event.tick.0 as i64 * i64::from(clock.tick_duration_secs),
            decision:       event.decision.as_str(),
            status:         event.status.as_str(),
            active_route:   event.active_route.map(|r| r.get()),
            switched_from,
            progress:       event.progress,
            total_cost:     event.cost.map(|c| c.total_cost),
            fuel_liters:    event.cost.map(|c| c.fuel_liters),
            co2_kg:         event.cost.map(|c| c.co2_kg),
            confidence:     event.cost.map(|c| c.confidence),
        }
    }
}

/// One finished trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummaryRow {
    pub trip_id:          u32,
    pub status:           &'static str,
    pub ticks:            u64,
    pub switches:         u32,
    pub degraded_ticks:   u32,
    pub final_route:      Option<u32>,
    /// Route ids in order, joined with `>`, e.g. `"0>2"`.
    pub route_history:    String,
    pub final_total_cost: Option<f64>,
    pub elapsed_secs:     u64,
    pub abort_reason:     Option<String>,
}

impl From<&TripSummary> for TripSummaryRow {
    fn from(s: &TripSummary) -> Self {
        let history: Vec<String> = s.route_history.iter().map(|r| r.get().to_string()).collect();
        Self {
            trip_id:          s.trip.get(),
            status:           s.status.as_str(),
            ticks:            s.ticks,
            switches:         s.switches,
            degraded_ticks:   s.degraded_ticks,
            final_route:      s.route_history.last().map(|r| r.get()),
            route_history:    history.join(">"),
            final_total_cost: s.final_cost.map(|c| c.total_cost),
            elapsed_secs:     s.elapsed_secs,
            abort_reason:     s.abort_reason.clone(),
        }
    }
}
