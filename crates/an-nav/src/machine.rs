//! The explore / pause / return state machine.

use an_core::{NavConfig, NavError, NavResult, NoiseSource, Pose, Vec2};
use an_heading::HeadingModel;
use tracing::debug;

use crate::{PathRecorder, Phase, plan_return_path};

/// What one call to [`NavigationStateMachine::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// The phase whose handler ran this tick.
    pub phase: Phase,
    /// The phase entered at the end of this tick, if a transition fired.
    pub entered: Option<Phase>,
}

impl StepOutcome {
    #[inline]
    fn stay(phase: Phase) -> Self {
        Self { phase, entered: None }
    }

    #[inline]
    fn enter(phase: Phase, next: Phase) -> Self {
        Self { phase, entered: Some(next) }
    }
}

/// Drives a single robot through one lap: explore to the shelf, dwell, then
/// walk a straight line home.
///
/// All state lives here and changes only through [`step`][Self::step].  The
/// only nondeterminism is the noise source passed in by the caller.
///
/// | Phase   | Per-tick action                                               |
/// |---------|---------------------------------------------------------------|
/// | Explore | heading step; record position; enter Pause on shelf contact   |
/// | Pause   | bump counter; enter Return (and plan path) past the dwell     |
/// | Return  | pop the next return waypoint into the position, if any       |
#[derive(Clone, Debug)]
pub struct NavigationStateMachine {
    config:        NavConfig,
    heading_model: HeadingModel,
    pose:          Pose,
    phase:         Phase,
    pause_counter: u32,
    recorder:      PathRecorder,
}

impl NavigationStateMachine {
    /// Validate `config` and place the robot at `start` in the Explore phase.
    pub fn new(config: NavConfig, start: Pose) -> NavResult<Self> {
        config.validate()?;
        if !start.is_finite() {
            return Err(NavError::InvalidConfiguration(format!(
                "start pose must be finite, got {} heading {}",
                start.position, start.heading
            )));
        }
        if !start.position.within_square(config.warehouse_half_extent) {
            return Err(NavError::InvalidConfiguration(format!(
                "start position {} lies outside the warehouse (half extent {})",
                start.position, config.warehouse_half_extent
            )));
        }
        Ok(Self {
            heading_model: HeadingModel::new(&config),
            recorder:      PathRecorder::new(start.position),
            pose:          start,
            phase:         Phase::Explore,
            pause_counter: 0,
            config,
        })
    }

    /// Start at the dock facing along +x, as the reference run does.
    pub fn at_dock(config: NavConfig) -> NavResult<Self> {
        let start = Pose::new(config.dock, 0.0);
        Self::new(config, start)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick.
    pub fn step<N: NoiseSource>(&mut self, noise: &mut N) -> StepOutcome {
        match self.phase {
            Phase::Explore => self.explore(noise),
            Phase::Pause   => self.pause(),
            Phase::Return  => self.return_home(),
        }
    }

    fn explore<N: NoiseSource>(&mut self, noise: &mut N) -> StepOutcome {
        self.pose = self.heading_model.compute(self.pose, noise);
        self.recorder.record_exploration(self.pose.position);

        let distance = self.pose.position.distance(self.config.shelf);
        if distance < self.config.contact_threshold {
            debug!(
                steps = self.recorder.exploration().len() - 1,
                distance,
                "shelf reached, pausing"
            );
            self.phase = Phase::Pause;
            return StepOutcome::enter(Phase::Explore, Phase::Pause);
        }
        StepOutcome::stay(Phase::Explore)
    }

    fn pause(&mut self) -> StepOutcome {
        self.pause_counter = self.pause_counter.saturating_add(1);
        if self.pause_counter <= self.config.pause_dwell_ticks {
            return StepOutcome::stay(Phase::Pause);
        }

        let path = plan_return_path(self.pose.position, self.config.dock, self.config.step_size);
        debug!(
            from = %self.pose.position,
            dock = %self.config.dock,
            waypoints = path.len(),
            "dwell complete, returning to dock"
        );
        self.recorder.set_return_path(path);
        self.phase = Phase::Return;
        StepOutcome::enter(Phase::Pause, Phase::Return)
    }

    fn return_home(&mut self) -> StepOutcome {
        if let Some(next) = self.recorder.consume_next_return() {
            self.pose.position = next;
        }
        StepOutcome::stay(Phase::Return)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pose.position
    }

    /// Pause ticks elapsed so far.  Never reset.
    #[inline]
    pub fn pause_counter(&self) -> u32 {
        self.pause_counter
    }

    #[inline]
    pub fn recorder(&self) -> &PathRecorder {
        &self.recorder
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// `true` once the robot is in Return with nothing left to replay.
    /// Every further step is a no-op.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase.is_terminal() && self.recorder.remaining_return().is_empty()
    }
}
