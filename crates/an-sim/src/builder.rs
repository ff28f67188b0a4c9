//! Fluent builder for constructing a [`SimulationDriver`].

use an_core::{NavConfig, NavResult, NoiseSource, Pose, SimConfig, SimRng};
use an_nav::NavigationStateMachine;

use crate::SimulationDriver;

/// Fluent builder for [`SimulationDriver<N>`].
///
/// # Required inputs
///
/// - [`NavConfig`]: dock, shelf, step size, thresholds, noise amplitude
/// - [`SimConfig`]: frame budget, frame interval, seed, output interval
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                           |
/// |---------------------|---------------------------------------------------|
/// | `.seed(s)`          | `SimConfig::seed` (OS entropy when `None`)        |
/// | `.noise(source)`    | `SimRng` seeded as above                          |
/// | `.start_pose(pose)` | at `NavConfig::dock`, heading 0                   |
///
/// # Example
///
/// ```rust,ignore
/// let driver = SimBuilder::new(nav, sim)
///     .noise(NoNoise)
///     .build()?;
/// ```
pub struct SimBuilder<N: NoiseSource = SimRng> {
    nav:   NavConfig,
    sim:   SimConfig,
    start: Option<Pose>,
    noise: N,
}

impl SimBuilder<SimRng> {
    /// Create a builder whose noise source is seeded from `sim.seed`.
    pub fn new(nav: NavConfig, sim: SimConfig) -> Self {
        let noise = SimRng::from_seed_option(sim.seed);
        Self { nav, sim, start: None, noise }
    }

    /// Fix the noise seed (overrides `SimConfig::seed`).
    pub fn seed(mut self, seed: u64) -> Self {
        self.sim.seed = Some(seed);
        self.noise = SimRng::new(seed);
        self
    }
}

impl<N: NoiseSource> SimBuilder<N> {
    /// Replace the noise source, e.g. with [`an_core::NoNoise`] for a
    /// deterministic walk.
    pub fn noise<M: NoiseSource>(self, noise: M) -> SimBuilder<M> {
        SimBuilder {
            nav:   self.nav,
            sim:   self.sim,
            start: self.start,
            noise,
        }
    }

    /// Start somewhere other than the dock.
    pub fn start_pose(mut self, pose: Pose) -> Self {
        self.start = Some(pose);
        self
    }

    /// Validate both configurations and return a driver at tick 0.
    ///
    /// Fails with `NavError::InvalidConfiguration` for any constant that
    /// cannot drive a run (e.g. `step_size == 0`).
    pub fn build(self) -> NavResult<SimulationDriver<N>> {
        self.sim.validate()?;
        let machine = match self.start {
            Some(pose) => NavigationStateMachine::new(self.nav, pose)?,
            None       => NavigationStateMachine::at_dock(self.nav)?,
        };
        Ok(SimulationDriver::new(self.sim, machine, self.noise))
    }
}
