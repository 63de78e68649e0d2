//! Point-in-time environment snapshots.
//!
//! A [`ConditionSnapshot`] is produced by the environment collaborator for a
//! single (location, timestamp) pair and is never mutated afterwards: fields
//! are private and the `with_*` methods consume the value while it is being
//! assembled.
//!
//! Each measurement has three possible states:
//!
//! | Field value                   | Meaning                                        |
//! |-------------------------------|------------------------------------------------|
//! | `None`                        | absent — the snapshot is incomplete             |
//! | `Some(Reading::Unknown)`      | the source explicitly could not measure it      |
//! | `Some(Reading::Observed(v))`  | a real measurement                              |
//!
//! Consumers reject absent fields and substitute the normal-condition
//! default for `Unknown` (see the `NORMAL_*` constants).

use crate::{GeoPoint, TrafficLevel};

/// Temperature assumed when the source reports it as unknown.
pub const NORMAL_TEMPERATURE_C: f64 = 15.0;
/// Precipitation assumed when unknown: dry.
pub const NORMAL_PRECIPITATION_MM: f64 = 0.0;
/// Wind speed assumed when unknown: calm.
pub const NORMAL_WIND_KMH: f64 = 0.0;

// ── Reading ───────────────────────────────────────────────────────────────────

/// A single measurement, or an explicit "could not measure" sentinel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reading<T> {
    Observed(T),
    Unknown,
}

impl<T: Copy> Reading<T> {
    /// The observed value, or `normal` for `Unknown`.
    #[inline]
    pub fn or_normal(self, normal: T) -> T {
        match self {
            Reading::Observed(v) => v,
            Reading::Unknown     => normal,
        }
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        matches!(self, Reading::Unknown)
    }
}

// ── ConditionSnapshot ─────────────────────────────────────────────────────────

/// Traffic and weather at one location and moment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionSnapshot {
    location:         GeoPoint,
    timestamp:        i64,
    traffic:          Option<Reading<TrafficLevel>>,
    temperature_c:    Option<Reading<f64>>,
    precipitation_mm: Option<Reading<f64>>,
    wind_kmh:         Option<Reading<f64>>,
    /// WMO weather interpretation code, when the source provides one.
    weather_code:     Option<u16>,
    /// `true` when produced by a fallback path rather than a live source.
    is_fallback:      bool,
}

impl ConditionSnapshot {
    /// Start an empty snapshot.  Every measurement is absent until set.
    pub fn new(location: GeoPoint, timestamp: i64) -> Self {
        Self {
            location,
            timestamp,
            traffic:          None,
            temperature_c:    None,
            precipitation_mm: None,
            wind_kmh:         None,
            weather_code:     None,
            is_fallback:      false,
        }
    }

    /// A complete snapshot of observed values.
    pub fn observed(
        location:         GeoPoint,
        timestamp:        i64,
        traffic:          TrafficLevel,
        temperature_c:    f64,
        precipitation_mm: f64,
        wind_kmh:         f64,
    ) -> Self {
        Self::new(location, timestamp)
            .with_traffic(Reading::Observed(traffic))
            .with_temperature(Reading::Observed(temperature_c))
            .with_precipitation(Reading::Observed(precipitation_mm))
            .with_wind(Reading::Observed(wind_kmh))
    }

    /// A complete snapshot in which every measurement is `Unknown`.
    pub fn unknown(location: GeoPoint, timestamp: i64) -> Self {
        Self::new(location, timestamp)
            .with_traffic(Reading::Unknown)
            .with_temperature(Reading::Unknown)
            .with_precipitation(Reading::Unknown)
            .with_wind(Reading::Unknown)
    }

    // ── Assembly ──────────────────────────────────────────────────────────

    pub fn with_traffic(mut self, traffic: Reading<TrafficLevel>) -> Self {
        self.traffic = Some(traffic);
        self
    }

    pub fn with_temperature(mut self, celsius: Reading<f64>) -> Self {
        self.temperature_c = Some(celsius);
        self
    }

    pub fn with_precipitation(mut self, mm: Reading<f64>) -> Self {
        self.precipitation_mm = Some(mm);
        self
    }

    pub fn with_wind(mut self, kmh: Reading<f64>) -> Self {
        self.wind_kmh = Some(kmh);
        self
    }

    pub fn with_weather_code(mut self, code: u16) -> Self {
        self.weather_code = Some(code);
        self
    }

    pub fn with_fallback(mut self, is_fallback: bool) -> Self {
        self.is_fallback = is_fallback;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn location(&self) -> GeoPoint {
        self.location
    }

    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[inline]
    pub fn traffic(&self) -> Option<Reading<TrafficLevel>> {
        self.traffic
    }

    #[inline]
    pub fn temperature_c(&self) -> Option<Reading<f64>> {
        self.temperature_c
    }

    #[inline]
    pub fn precipitation_mm(&self) -> Option<Reading<f64>> {
        self.precipitation_mm
    }

    #[inline]
    pub fn wind_kmh(&self) -> Option<Reading<f64>> {
        self.wind_kmh
    }

    #[inline]
    pub fn weather_code(&self) -> Option<u16> {
        self.weather_code
    }

    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// Name of the first absent measurement, or `None` if complete.
    pub fn first_missing(&self) -> Option<&'static str> {
        if self.traffic.is_none() {
            Some("traffic")
        } else if self.temperature_c.is_none() {
            Some("temperature_c")
        } else if self.precipitation_mm.is_none() {
            Some("precipitation_mm")
        } else if self.wind_kmh.is_none() {
            Some("wind_kmh")
        } else {
            None
        }
    }

    /// `true` if any present measurement is the `Unknown` sentinel.
    pub fn has_unknown(&self) -> bool {
        self.traffic.is_some_and(Reading::is_unknown)
            || self.temperature_c.is_some_and(Reading::is_unknown)
            || self.precipitation_mm.is_some_and(Reading::is_unknown)
            || self.wind_kmh.is_some_and(Reading::is_unknown)
    }

    /// Traffic with `Unknown` resolved to `Normal`.  `None` if absent.
    pub fn effective_traffic(&self) -> Option<TrafficLevel> {
        self.traffic.map(|r| r.or_normal(TrafficLevel::Normal))
    }

    /// Precipitation with `Unknown` resolved to dry.  `None` if absent.
    pub fn effective_precipitation_mm(&self) -> Option<f64> {
        self.precipitation_mm.map(|r| r.or_normal(NORMAL_PRECIPITATION_MM))
    }

    /// Wind with `Unknown` resolved to calm.  `None` if absent.
    pub fn effective_wind_kmh(&self) -> Option<f64> {
        self.wind_kmh.map(|r| r.or_normal(NORMAL_WIND_KMH))
    }

    /// Temperature with `Unknown` resolved to the mild default.  `None` if absent.
    pub fn effective_temperature_c(&self) -> Option<f64> {
        self.temperature_c.map(|r| r.or_normal(NORMAL_TEMPERATURE_C))
    }
}
