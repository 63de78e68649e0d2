//! The environment collaborator trait and simple implementations.

use std::sync::Arc;

use eco_core::{ConditionSnapshot, GeoPoint, Reading, TrafficLevel};
use tracing::warn;

use crate::traffic::{historical_estimate, hour_of};
use crate::EnvResult;

// ── EnvironmentProvider trait ─────────────────────────────────────────────────

/// Samples traffic and weather at a location and moment.
///
/// Test doubles must be idempotent for a fixed (location, timestamp) pair;
/// live sources are naturally time-varying.  Timeouts are the implementor's
/// responsibility and surface as an [`EnvError`][crate::EnvError].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one source can serve several
/// independent trips.
pub trait EnvironmentProvider: Send + Sync {
    fn sample(&self, location: GeoPoint, timestamp: i64) -> EnvResult<ConditionSnapshot>;
}

impl<T: EnvironmentProvider + ?Sized> EnvironmentProvider for Arc<T> {
    fn sample(&self, location: GeoPoint, timestamp: i64) -> EnvResult<ConditionSnapshot> {
        (**self).sample(location, timestamp)
    }
}

impl<T: EnvironmentProvider + ?Sized> EnvironmentProvider for Box<T> {
    fn sample(&self, location: GeoPoint, timestamp: i64) -> EnvResult<ConditionSnapshot> {
        (**self).sample(location, timestamp)
    }
}

// ── FnEnvironment ─────────────────────────────────────────────────────────────

/// Adapts a closure into an [`EnvironmentProvider`].
///
/// ```rust,ignore
/// let env = FnEnvironment(|loc, ts| Ok(ConditionSnapshot::unknown(loc, ts)));
/// ```
pub struct FnEnvironment<F>(pub F);

impl<F> EnvironmentProvider for FnEnvironment<F>
where
    F: Fn(GeoPoint, i64) -> EnvResult<ConditionSnapshot> + Send + Sync,
{
    fn sample(&self, location: GeoPoint, timestamp: i64) -> EnvResult<ConditionSnapshot> {
        (self.0)(location, timestamp)
    }
}

// ── FixedEnvironment ──────────────────────────────────────────────────────────

/// The same observed conditions everywhere, at all times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEnvironment {
    pub traffic:          TrafficLevel,
    pub temperature_c:    f64,
    pub precipitation_mm: f64,
    pub wind_kmh:         f64,
}

impl FixedEnvironment {
    /// Normal traffic, dry, light wind.
    pub fn calm() -> Self {
        Self {
            traffic:          TrafficLevel::Normal,
            temperature_c:    18.0,
            precipitation_mm: 0.0,
            wind_kmh:         5.0,
        }
    }
}

impl EnvironmentProvider for FixedEnvironment {
    fn sample(&self, location: GeoPoint, timestamp: i64) -> EnvResult<ConditionSnapshot> {
        Ok(ConditionSnapshot::observed(
            location,
            timestamp,
            self.traffic,
            self.temperature_c,
            self.precipitation_mm,
            self.wind_kmh,
        ))
    }
}

// ── FallbackEnvironment ───────────────────────────────────────────────────────

/// Conservative values used when the inner source fails.
pub const FALLBACK_TEMPERATURE_C: f64 = 15.0;
pub const FALLBACK_WIND_KMH: f64 = 5.0;
pub const FALLBACK_PRECIPITATION_MM: f64 = 0.0;

/// Wraps a source and never fails: on error it returns a conservative
/// snapshot flagged with `is_fallback = true`, with traffic taken from the
/// time-of-day estimate.
///
/// Wrapping hides collaborator failures from the engine, so its ticks are
/// never reported as degraded; the lower confidence of fallback snapshots
/// shows up in the cost breakdown instead.
pub struct FallbackEnvironment<P> {
    inner: P,
}

impl<P: EnvironmentProvider> FallbackEnvironment<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    /// The snapshot served when the inner source fails.
    pub fn fallback_snapshot(location: GeoPoint, timestamp: i64) -> ConditionSnapshot {
        ConditionSnapshot::new(location, timestamp)
            .with_traffic(Reading::Observed(historical_estimate(hour_of(timestamp))))
            .with_temperature(Reading::Observed(FALLBACK_TEMPERATURE_C))
            .with_precipitation(Reading::Observed(FALLBACK_PRECIPITATION_MM))
            .with_wind(Reading::Observed(FALLBACK_WIND_KMH))
            .with_fallback(true)
    }
}

impl<P: EnvironmentProvider> EnvironmentProvider for FallbackEnvironment<P> {
    fn sample(&self, location: GeoPoint, timestamp: i64) -> EnvResult<ConditionSnapshot> {
        match self.inner.sample(location, timestamp) {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => {
                warn!(%location, timestamp, error = %e, "environment sample failed; serving fallback");
                Ok(Self::fallback_snapshot(location, timestamp))
            }
        }
    }
}
