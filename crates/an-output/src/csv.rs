//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectory.csv`
//! - `phase_transitions.csv`

use std::fs::File;
use std::path::Path;

use ::csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TrajectoryRow, TransitionRow};

pub const TRAJECTORY_FILE: &str = "trajectory.csv";
pub const TRANSITIONS_FILE: &str = "phase_transitions.csv";

/// Writes the simulation trace to two CSV files.
pub struct CsvWriter {
    trajectory:  Writer<File>,
    transitions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  `dir` must exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectory = Writer::from_path(dir.join(TRAJECTORY_FILE))?;
        trajectory.write_record([
            "tick",
            "elapsed_ms",
            "phase",
            "x",
            "y",
            "heading",
            "exploration_len",
            "return_remaining",
        ])?;

        let mut transitions = Writer::from_path(dir.join(TRANSITIONS_FILE))?;
        transitions.write_record(["tick", "from", "to"])?;

        Ok(Self {
            trajectory,
            transitions,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trajectory(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        self.trajectory.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.phase.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.heading.to_string(),
            row.exploration_len.to_string(),
            row.return_remaining.to_string(),
        ])?;
        Ok(())
    }

    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()> {
        self.transitions.write_record([
            row.tick.to_string(),
            row.from.to_string(),
            row.to.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectory.flush()?;
        self.transitions.flush()?;
        Ok(())
    }
}
