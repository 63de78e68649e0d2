//! Simulated trip time.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  The mapping to
//! wall-clock time lives in `TripClock`:
//!
//!   unix_time = start_unix_secs + tick * tick_duration_secs
//!
//! The decision loop never reads the real clock.  Simulated time may run
//! faster or slower than real time, which keeps every run reproducible.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter within one trip.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks elapsed from `earlier` to `self` (saturating).
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TripClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and Unix seconds for one trip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripClock {
    /// Unix timestamp (seconds) of tick 0.
    pub start_unix_secs: i64,
    /// Simulated seconds per tick.
    pub tick_duration_secs: u32,
    /// The current tick, advanced once per decision cycle.
    pub current_tick: Tick,
}

impl TripClock {
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self {
            start_unix_secs,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * self.tick_duration_secs as u64
    }

    /// Unix timestamp corresponding to `current_tick`.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.start_unix_secs + self.elapsed_secs() as i64
    }

    /// Hour of day (UTC, 0–23) at `current_tick`.
    pub fn hour_of_day(&self) -> u32 {
        (self.current_unix_secs().rem_euclid(86_400) / 3_600) as u32
    }
}

impl fmt::Display for TripClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed_secs();
        write!(f, "{} (+{:02}:{:02})", self.current_tick, secs / 3_600, (secs % 3_600) / 60)
    }
}

// ── TripConfig ────────────────────────────────────────────────────────────────

/// Per-trip timing configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TripConfig {
    /// Unix timestamp of the departure.
    pub start_unix_secs: i64,

    /// Simulated seconds between two decision ticks.  Default: 300 (5 min).
    pub tick_duration_secs: u32,

    /// Upper bound on ticks.  A trip still running at this limit is aborted.
    pub max_ticks: u64,

    /// Seed handed to simulated collaborators.  The engine itself draws no
    /// random numbers.
    pub seed: u64,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            start_unix_secs:    0,
            tick_duration_secs: 300,
            max_ticks:          10_000,
            seed:               42,
        }
    }
}

impl TripConfig {
    /// Construct a `TripClock` positioned at tick 0 of this trip.
    pub fn make_clock(&self) -> TripClock {
        TripClock::new(self.start_unix_secs, self.tick_duration_secs)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick_duration_secs must be positive".into()));
        }
        if self.max_ticks == 0 {
            return Err(CoreError::Config("max_ticks must be positive".into()));
        }
        Ok(())
    }
}
