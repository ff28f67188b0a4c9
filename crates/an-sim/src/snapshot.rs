//! What a renderer sees after each tick.

use std::collections::VecDeque;

use an_core::{NavConfig, Pose, Tick, Vec2};
use an_nav::Phase;

/// Owned snapshot returned by [`SimulationDriver::tick`][crate::SimulationDriver::tick].
///
/// Copies both paths, so it stays valid while the driver keeps running.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentState {
    /// Ticks processed so far, including the one that produced this state.
    pub tick:             Tick,
    pub phase:            Phase,
    pub position:         Vec2,
    pub heading:          f64,
    pub pause_counter:    u32,
    /// Full exploration trail, oldest first.
    pub exploration_path: Vec<Vec2>,
    /// Return waypoints not yet replayed.  Empty before Return.
    pub return_path:      Vec<Vec2>,
}

/// Borrowed view of the driver state.
///
/// Handed to [`SimObserver`][crate::SimObserver] hooks every tick, so it
/// must not allocate.  Call [`to_state`][Self::to_state] for an owned copy.
#[derive(Clone, Copy, Debug)]
pub struct StateView<'a> {
    pub tick:             Tick,
    pub phase:            Phase,
    pub pose:             Pose,
    pub pause_counter:    u32,
    pub exploration_path: &'a [Vec2],
    pub return_path:      &'a VecDeque<Vec2>,
    /// Layout constants (dock, shelf, warehouse extent) for drawing.
    pub config:           &'a NavConfig,
}

impl StateView<'_> {
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pose.position
    }

    pub fn to_state(&self) -> CurrentState {
        CurrentState {
            tick:             self.tick,
            phase:            self.phase,
            position:         self.pose.position,
            heading:          self.pose.heading,
            pause_counter:    self.pause_counter,
            exploration_path: self.exploration_path.to_vec(),
            return_path:      self.return_path.iter().copied().collect(),
        }
    }
}
