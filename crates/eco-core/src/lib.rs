//! `eco-core` — foundational types for the eco-route decision engine.
//!
//! Every other `eco-*` crate depends on this one.  It has no `eco-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`ids`]        | `RouteId`, `TripId`                                     |
//! | [`geo`]        | `GeoPoint`, haversine distance, interpolation           |
//! | [`time`]       | `Tick`, `TripClock`, `TripConfig`                       |
//! | [`traffic`]    | `TrafficLevel` enum                                     |
//! | [`conditions`] | `ConditionSnapshot`, `Reading`                          |
//! | [`rng`]        | `SeededRng` for collaborator doubles                    |
//! | [`error`]      | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod conditions;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod traffic;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use conditions::{ConditionSnapshot, Reading};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{RouteId, TripId};
pub use rng::SeededRng;
pub use time::{Tick, TripClock, TripConfig};
pub use traffic::TrafficLevel;
