//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TrajectoryRow, TransitionRow};

/// Sink for simulation trace rows.
///
/// Errors are stored by the observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one trajectory row.
    fn write_trajectory(&mut self, row: &TrajectoryRow) -> OutputResult<()>;

    /// Write one phase-transition row.
    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
