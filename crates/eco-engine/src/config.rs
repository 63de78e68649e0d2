//! Engine tunables.

use crate::{EngineError, EngineResult, SwitchPolicy};

/// How far the trip advances along its active route per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Progression {
    /// A constant fraction per tick, in `(0, 1]`.
    FixedStep(f64),
    /// Tick duration over the active route's nominal duration.
    #[default]
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub switch_policy: SwitchPolicy,
    pub progression: Progression,
    /// Re-fetch candidates every this many ticks.  0 disables refresh.
    pub refresh_interval_ticks: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            switch_policy: SwitchPolicy::default(),
            progression: Progression::Duration,
            refresh_interval_ticks: 0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> EngineResult<()> {
        self.switch_policy.validate()?;
        if let Progression::FixedStep(step) = self.progression {
            if !step.is_finite() || step <= 0.0 || step > 1.0 {
                return Err(EngineError::Config(format!("fixed progress step must lie in (0, 1], got {step}")));
            }
        }
        Ok(())
    }
}
