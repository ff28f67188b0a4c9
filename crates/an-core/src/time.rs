//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter, one tick per rendered
//! frame.  The mapping to wall-clock time is held in `FrameClock`:
//!
//!   elapsed_ms = tick * frame_interval_ms
//!
//! The clock is informational only: the simulation never sleeps.  Pacing is
//! the renderer's business.

use std::fmt;

use crate::{NavError, NavResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// `true` if `self` falls on an `interval` boundary.  A zero interval
    /// never matches.
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to animation time.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// How many milliseconds one tick represents on screen.  Default: 50.
    pub frame_interval_ms: u32,
    /// The current tick, advanced by `FrameClock::advance()`.
    pub current_tick: Tick,
}

impl FrameClock {
    pub fn new(frame_interval_ms: u32) -> Self {
        Self { frame_interval_ms, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Animation time elapsed since tick 0.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0 * self.frame_interval_ms as u64
    }

    #[inline]
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed_ms() as f64 / 1_000.0
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs_f64())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: how long to run, how to seed, how often to emit.
///
/// Typically loaded from JSON by the application crate alongside a
/// [`NavConfig`][crate::NavConfig].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Frames requested by `SimulationDriver::run`.  The reference animation
    /// uses 400.
    pub total_ticks: u64,

    /// Milliseconds per frame.  Default: 50.
    pub frame_interval_ms: u32,

    /// Noise seed.  `None` draws the seed from OS entropy, so runs differ.
    pub seed: Option<u64>,

    /// Emit a snapshot every N ticks.  1 = every tick; 0 = never.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           400,
            frame_interval_ms:     50,
            seed:                  None,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which a bounded run stops requesting frames (exclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> FrameClock {
        FrameClock::new(self.frame_interval_ms)
    }

    pub fn validate(&self) -> NavResult<()> {
        if self.frame_interval_ms == 0 {
            return Err(NavError::config("frame_interval_ms must be at least 1"));
        }
        Ok(())
    }
}
