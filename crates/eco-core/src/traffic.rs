//! Traffic level enum shared by the environment collaborator and the cost model.

use std::str::FromStr;

use crate::CoreError;

/// Coarse traffic condition reported for a location.
///
/// Variants are ordered from lightest to heaviest, so `Normal < Heavy`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrafficLevel {
    #[default]
    Normal,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    pub const ALL: [TrafficLevel; 3] = [TrafficLevel::Normal, TrafficLevel::Moderate, TrafficLevel::Heavy];

    /// Lower-case label, used for CSV columns and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficLevel::Normal   => "normal",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy    => "heavy",
        }
    }
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafficLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal"   => Ok(TrafficLevel::Normal),
            "moderate" => Ok(TrafficLevel::Moderate),
            "heavy"    => Ok(TrafficLevel::Heavy),
            other      => Err(CoreError::Parse(format!("unknown traffic level {other:?}"))),
        }
    }
}
