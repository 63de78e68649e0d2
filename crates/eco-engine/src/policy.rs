use crate::{EngineError, EngineResult};

/// Relative improvement an alternative needs before the engine switches.
pub const DEFAULT_SWITCH_MARGIN: f64 = 0.08;

/// Hysteresis rule for route switching.
///
/// An alternative wins only when its cost is below the active route's cost
/// by strictly more than `margin` (relative).  Small snapshot-to-snapshot
/// noise therefore never flips the active route back and forth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchPolicy {
    pub margin: f64,
}

impl Default for SwitchPolicy {
    fn default() -> Self {
        Self { margin: DEFAULT_SWITCH_MARGIN }
    }
}

impl SwitchPolicy {
    pub fn new(margin: f64) -> EngineResult<Self> {
        let policy = Self { margin };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !self.margin.is_finite() || !(0.0..1.0).contains(&self.margin) {
            return Err(EngineError::Config(format!(
                "switch margin must lie in [0, 1), got {}",
                self.margin
            )));
        }
        Ok(())
    }

    /// `true` if `alternative_cost` beats `active_cost` by more than the margin.
    #[inline]
    pub fn should_switch(&self, active_cost: f64, alternative_cost: f64) -> bool {
        alternative_cost < active_cost * (1.0 - self.margin)
    }
}
