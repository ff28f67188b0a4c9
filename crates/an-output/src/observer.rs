//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use an_core::{SimConfig, Tick};
use an_nav::Phase;
use an_sim::{SimObserver, StateView};

use crate::row::{TrajectoryRow, TransitionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes trajectory snapshots and phase transitions
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `driver.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    frame_interval_ms: u32,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// animation-time column.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            frame_interval_ms: config.frame_interval_ms,
            last_error:        None,
        }
    }

    /// Take the stored write error (if any).  Only the first error is kept.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_phase_change(&mut self, tick: Tick, from: Phase, to: Phase) {
        let row = TransitionRow { tick: tick.0, from, to };
        let result = self.writer.write_transition(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, state: &StateView<'_>) {
        let row = TrajectoryRow {
            tick:             tick.0,
            elapsed_ms:       tick.0 * self.frame_interval_ms as u64,
            phase:            state.phase,
            x:                state.pose.position.x,
            y:                state.pose.position.y,
            heading:          state.pose.heading,
            exploration_len:  state.exploration_path.len() as u64,
            return_remaining: state.return_path.len() as u64,
        };
        let result = self.writer.write_trajectory(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _state: &StateView<'_>) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
