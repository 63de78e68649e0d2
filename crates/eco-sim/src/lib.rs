//! `eco-sim` — drives a [`DecisionEngine`] from planning to a terminal state.
//!
//! # Loop
//!
//! ```text
//! on_trip_start
//! loop:
//!   terminal?              → stop
//!   abort handle raised?   → engine.abort(), report, stop
//!   max_ticks reached?     → engine.abort(), report, stop
//!   engine.tick()          → on_decision(event)
//! on_trip_end(summary)
//! ```
//!
//! Simulated time advances one tick per iteration with no relation to the
//! wall clock, so a run is fully reproducible for given collaborators.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_fleet`] runs trips on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let engine = EngineBuilder::new(TripId(0), SimulatedEnvironment::new(42), router)
//!     .endpoints(origin, destination)
//!     .build()?;
//! let summary = TripSimulator::new(engine).run(&mut TracingObserver)?;
//! ```
//!
//! [`DecisionEngine`]: eco_engine::DecisionEngine

pub mod error;
pub mod fleet;
pub mod observer;
pub mod simulator;
pub mod summary;


pub use error::{SimError, SimResult};
pub use fleet::run_fleet;
pub use observer::{NoopObserver, TracingObserver, TripObserver};
pub use simulator::{AbortHandle, TripSimulator};
pub use summary::TripSummary;
