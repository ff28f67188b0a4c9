//! Run configuration file and CLI overrides.

use std::path::{Path, PathBuf};

use an_core::{NavConfig, SimConfig};
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Everything one demo run needs.  Both sections are optional in the file;
/// missing fields fall back to the reference values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub nav: NavConfig,
    pub sim: SimConfig,
}

impl RunConfig {
    /// Load a JSON run configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Bio-inspired warehouse robot: biased random walk to the shelf, straight
/// line home.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON run configuration (`{"nav": {...}, "sim": {...}}`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Noise seed; omit for a different walk every run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Frames to simulate (reference animation: 400)
    #[arg(short, long)]
    pub frames: Option<u64>,

    /// Disable the heading perturbation (deterministic walk)
    #[arg(long)]
    pub zero_noise: bool,

    /// Directory for trajectory.csv and phase_transitions.csv
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Redraw every N frames while running (0 = final frame only)
    #[arg(long, default_value_t = 0)]
    pub render_every: u64,

    /// Play back at the frame interval (pair with --render-every to watch)
    #[arg(long)]
    pub realtime: bool,

    /// Canvas width in characters
    #[arg(long, default_value_t = 61)]
    pub width: usize,

    /// Canvas height in characters
    #[arg(long, default_value_t = 31)]
    pub height: usize,
}

impl Args {
    /// Apply command-line overrides on top of the file configuration.
    pub fn apply(&self, run: &mut RunConfig) {
        if let Some(seed) = self.seed {
            run.sim.seed = Some(seed);
        }
        if let Some(frames) = self.frames {
            run.sim.total_ticks = frames;
        }
        if self.zero_noise {
            run.nav.noise_amplitude = 0.0;
        }
    }
}
