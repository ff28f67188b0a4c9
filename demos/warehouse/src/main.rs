//! warehouse: one lap of the bio-inspired warehouse robot.
//!
//! The robot leaves the dock on a biased random walk toward the shelf,
//! dwells there, then walks a straight line home.  The driver is stepped
//! frame by frame; this binary plays the external renderer: it draws ASCII
//! frames, optionally traces every tick to CSV, and prints a final "proof"
//! frame with a summary.
//!
//! ```text
//! cargo run -p warehouse -- --seed 42 --render-every 10 --realtime
//! cargo run -p warehouse -- --zero-noise --output output/warehouse
//! RUST_LOG=an_nav=debug cargo run -p warehouse
//! ```

mod config;
mod render;


use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use an_core::{Tick, Vec2};
use an_nav::Phase;
use an_output::{CsvWriter, SimOutputObserver};
use an_sim::{SimBuilder, SimObserver, StateView};

use config::{Args, RunConfig};
use render::{TerminalRenderer, render_frame};

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Feeds every hook to the renderer and, when enabled, the CSV trace.
struct DemoObserver {
    renderer: TerminalRenderer,
    trace:    Option<SimOutputObserver<CsvWriter>>,
}

impl SimObserver for DemoObserver {
    fn on_phase_change(&mut self, tick: Tick, from: Phase, to: Phase) {
        info!(%tick, %from, %to, "phase change");
        if let Some(trace) = &mut self.trace {
            trace.on_phase_change(tick, from, to);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, state: &StateView<'_>) {
        self.renderer.on_snapshot(tick, state);
        if let Some(trace) = &mut self.trace {
            trace.on_snapshot(tick, state);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, state: &StateView<'_>) {
        if let Some(trace) = &mut self.trace {
            trace.on_sim_end(final_tick, state);
        }
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Length of the polyline through `points`.
fn path_length(points: &[Vec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

fn print_summary(state: &StateView<'_>, elapsed: Duration) {
    let dock = state.config.dock;
    let explored = path_length(state.exploration_path);
    let straight = dock.distance(state.config.shelf);

    println!("Simulated {} frames in {:.3} s", state.tick.0, elapsed.as_secs_f64());
    println!("  final phase        : {}", state.phase);
    println!("  position           : {}", state.position());
    println!("  exploration points : {}", state.exploration_path.len());
    println!("  exploration length : {explored:.2} (straight line {straight:.2})");
    println!("  return points left : {}", state.return_path.len());
    println!("  distance to dock   : {:.3}", state.position().distance(dock));
    let lap_complete = state.phase == Phase::Return && state.return_path.is_empty();
    println!("  lap complete       : {}", if lap_complete { "yes" } else { "no" });
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warehouse=info")),
        )
        .init();

    let args = Args::parse();

    // 1. Configuration: file (or defaults), then CLI overrides.
    let mut run = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            RunConfig::load(path)?
        }
        None => RunConfig::default(),
    };
    args.apply(&mut run);
    if run.sim.seed.is_none() {
        info!("no seed given, walk will differ between runs");
    }

    // 2. Driver.
    let mut driver = SimBuilder::new(run.nav.clone(), run.sim.clone())
        .build()
        .context("invalid run configuration")?;

    // 3. Observers.
    let trace = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(Path::new(dir))?;
            Some(SimOutputObserver::new(writer, &run.sim))
        }
        None => None,
    };
    // One snapshot covers `output_interval_ticks` frames.
    let pace = args.realtime.then(|| {
        Duration::from_millis(
            run.sim.frame_interval_ms as u64 * run.sim.output_interval_ticks.max(1),
        )
    });
    let mut obs = DemoObserver {
        renderer: TerminalRenderer::new(args.render_every, args.width, args.height, pace),
        trace,
    };

    // 4. Run the bounded animation loop.
    let t0 = Instant::now();
    driver.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.trace.as_mut().and_then(|t| t.take_error()) {
        warn!("output error: {e}");
    }
    if let Some(dir) = &args.output {
        info!(dir = %dir.display(), "trace written");
    }

    // 5. Proof frame and summary.
    let state = driver.view();
    println!();
    print!("{}", render_frame(&state, args.width, args.height));
    print_summary(&state, elapsed);

    Ok(())
}
