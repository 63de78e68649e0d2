//! `eco-env` — where condition snapshots come from.
//!
//! The decision engine treats weather and traffic as opaque inputs sampled
//! through [`EnvironmentProvider`].  Anything random lives here, in the
//! simulated sources, never in the engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`provider`]  | `EnvironmentProvider` trait, `FixedEnvironment`, `FnEnvironment`, `FallbackEnvironment` |
//! | [`simulated`] | `SimulatedEnvironment` — seeded, reproducible weather events and rush hours |
//! | [`traffic`]   | Traffic inference from routing speed and time of day           |
//! | [`weather`]   | WMO weather-code labels                                        |
//! | [`error`]     | `EnvError`, `EnvResult<T>`                                     |

pub mod error;
pub mod provider;
pub mod simulated;
pub mod traffic;
pub mod weather;

#[cfg(test)]
mod tests;

pub use error::{EnvError, EnvResult};
pub use provider::{EnvironmentProvider, FallbackEnvironment, FixedEnvironment, FnEnvironment};
pub use simulated::{SimulatedEnvironment, SimulationProfile};
pub use traffic::{historical_estimate, infer_from_speed};
pub use weather::weather_label;
