//! `eco-engine` — the per-trip decision state machine.
//!
//! # Lifecycle
//!
//! ```text
//! Planning ──▶ InProgress ──▶ Rerouted ──▶ InProgress ──▶ … ──▶ Arrived
//!     │             │             │
//!     └─────────────┴─────────────┴──▶ Aborted
//! ```
//!
//! Each call to [`DecisionEngine::tick`] handles one decision cycle:
//!
//! ```text
//! Planning:    sample origin ─▶ score all ─▶ pick best ─▶ InProgress
//! otherwise:   advance progress ─▶ arrived?
//!              refresh candidates (every N ticks)
//!              sample each candidate at its own probe point (stale on failure)
//!              score all ─▶ apply SwitchPolicy ─▶ Continue | Switch | Degraded
//! ```
//!
//! A `Rerouted` status lasts exactly one tick.  Degraded ticks never switch.
//! Terminal states reject every further tick with
//! [`EngineError::InvalidState`].

pub mod builder;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod policy;
pub mod state;


pub use builder::EngineBuilder;
pub use config::{EngineConfig, Progression};
pub use decision::{Decision, DecisionEvent};
pub use engine::DecisionEngine;
pub use error::{EngineError, EngineResult};
pub use policy::{DEFAULT_SWITCH_MARGIN, SwitchPolicy};
pub use state::{TripState, TripStatus};
