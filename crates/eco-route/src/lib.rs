//! `eco-route` — candidate routes between one origin and destination.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`route`]      | `RouteSummary` — immutable route attributes + polyline        |
//! | [`candidates`] | `CandidateSet` — bounded, de-duplicated alternatives          |
//! | [`provider`]   | `RoutingProvider` trait, `StaticRouter`, `StraightLineRouter` |
//! | [`elevation`]  | `ElevationSource` trait, ascent/descent from sampled profiles |
//! | [`error`]      | `RouteError`, `RouteResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod candidates;
pub mod elevation;
pub mod error;
pub mod provider;
pub mod route;

#[cfg(test)]
mod tests;

pub use candidates::{CandidateSet, DEFAULT_DEDUP_TOLERANCE_KM, MAX_CANDIDATES};
pub use elevation::{ElevationSource, annotate_elevation, ascent_descent, sample_indices};
pub use error::{RouteError, RouteResult};
pub use provider::{RoutingProvider, StaticRouter, StraightLineRouter};
pub use route::RouteSummary;
