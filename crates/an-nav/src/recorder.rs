//! `PathRecorder`: the two trajectories a renderer draws.

use std::collections::VecDeque;

use an_core::Vec2;

/// Owns the exploration trail and the pending return path.
///
/// - The exploration path is append-only: it is never truncated or edited.
/// - The return path is written once by [`set_return_path`][Self::set_return_path]
///   and afterwards only shrinks from the front.
#[derive(Clone, Debug, Default)]
pub struct PathRecorder {
    exploration:    Vec<Vec2>,
    return_path:    VecDeque<Vec2>,
    return_planned: bool,
}

impl PathRecorder {
    /// A recorder whose exploration path starts at `start`.
    pub fn new(start: Vec2) -> Self {
        Self {
            exploration:    vec![start],
            return_path:    VecDeque::new(),
            return_planned: false,
        }
    }

    /// Append one explored position.
    #[inline]
    pub fn record_exploration(&mut self, position: Vec2) {
        self.exploration.push(position);
    }

    /// Install the return path.
    ///
    /// Only the first call has any effect; later calls leave the queue
    /// untouched and return `false`.
    pub fn set_return_path(&mut self, points: impl IntoIterator<Item = Vec2>) -> bool {
        if self.return_planned {
            return false;
        }
        self.return_path.extend(points);
        self.return_planned = true;
        true
    }

    /// Pop the next return waypoint, or `None` once the path is exhausted
    /// (or was never set).
    #[inline]
    pub fn consume_next_return(&mut self) -> Option<Vec2> {
        self.return_path.pop_front()
    }

    /// Every explored position, oldest first.
    #[inline]
    pub fn exploration(&self) -> &[Vec2] {
        &self.exploration
    }

    /// Return waypoints not yet consumed.
    #[inline]
    pub fn remaining_return(&self) -> &VecDeque<Vec2> {
        &self.return_path
    }

    /// `true` once `set_return_path` has been called, even if it was empty.
    #[inline]
    pub fn return_planned(&self) -> bool {
        self.return_planned
    }
}
