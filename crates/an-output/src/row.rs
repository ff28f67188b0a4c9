//! Plain data row types written by output backends.

use an_nav::Phase;

/// Robot state after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub tick:             u64,
    /// Animation time of the tick, `tick * frame_interval_ms`.
    pub elapsed_ms:       u64,
    pub phase:            Phase,
    pub x:                f64,
    pub y:                f64,
    pub heading:          f64,
    /// Points on the exploration path, initial position included.
    pub exploration_len:  u64,
    /// Return waypoints still queued.
    pub return_remaining: u64,
}

/// One phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRow {
    pub tick: u64,
    pub from: Phase,
    pub to:   Phase,
}
