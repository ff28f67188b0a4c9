//! Navigation phase enum.

/// Which leg of the lap the robot is on.
///
/// Exactly one phase is active at a time.  Transitions only ever move
/// forward: `Explore → Pause → Return`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Phase {
    /// Biased random walk toward the shelf (initial phase).
    #[default]
    Explore,
    /// Dwelling at the shelf.
    Pause,
    /// Replaying the straight-line path back to the dock (terminal).
    Return,
}

impl Phase {
    /// `true` for the phase that has no outgoing transition.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Return)
    }

    /// Human-readable label, used in CSV output and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Explore => "explore",
            Phase::Pause   => "pause",
            Phase::Return  => "return",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
