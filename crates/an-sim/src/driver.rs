//! The `SimulationDriver` and its bounded run loops.

use an_core::{FrameClock, NoiseSource, SimConfig, SimRng, Tick};
use an_nav::{NavigationStateMachine, Phase, StepOutcome};
use tracing::{debug, info};

use crate::{CurrentState, SimObserver, StateView};

/// Owns one simulation and advances it one tick per request.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  All state (pose, paths,
/// counters, noise source) is owned here and mutated only by
/// [`tick`][Self::tick] and the run loops built on it.
pub struct SimulationDriver<N: NoiseSource = SimRng> {
    config:  SimConfig,
    clock:   FrameClock,
    machine: NavigationStateMachine,
    noise:   N,
}

impl<N: NoiseSource> SimulationDriver<N> {
    pub(crate) fn new(config: SimConfig, machine: NavigationStateMachine, noise: N) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            machine,
            noise,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance exactly one step and return an owned snapshot.
    pub fn tick(&mut self) -> CurrentState {
        self.advance();
        self.view().to_state()
    }

    /// Borrowed view of the current state.  Does not advance.
    pub fn view(&self) -> StateView<'_> {
        let recorder = self.machine.recorder();
        StateView {
            tick:             self.clock.current_tick,
            phase:            self.machine.phase(),
            pose:             self.machine.pose(),
            pause_counter:    self.machine.pause_counter(),
            exploration_path: recorder.exploration(),
            return_path:      recorder.remaining_return(),
            config:           self.machine.config(),
        }
    }

    /// Run exactly `n` ticks from the current position, ignoring
    /// `total_ticks`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
    }

    /// Run until the clock reaches `SimConfig::total_ticks`.
    ///
    /// This is the bounded renderer loop of the reference animation
    /// (400 frames).  Calling it again once the budget is spent only fires
    /// `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            frames = self.config.total_ticks,
            seed = ?self.config.seed,
            shelf = %self.machine.config().shelf,
            dock = %self.machine.config().dock,
            "starting run"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_tick(observer);
        }

        let state = self.view();
        info!(
            tick = %state.tick,
            phase = %state.phase,
            explored = state.exploration_path.len(),
            return_remaining = state.return_path.len(),
            "run finished"
        );
        observer.on_sim_end(self.clock.current_tick, &state);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// `true` once the lap is complete and further ticks change nothing.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.machine.is_idle()
    }

    #[inline]
    pub fn sim_config(&self) -> &SimConfig {
        &self.config
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn advance(&mut self) -> StepOutcome {
        let outcome = self.machine.step(&mut self.noise);
        if let Some(next) = outcome.entered {
            debug!(tick = %self.clock.current_tick, from = %outcome.phase, to = %next, "phase change");
        }
        self.clock.advance();
        outcome
    }

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let outcome = self.advance();
        if let Some(next) = outcome.entered {
            observer.on_phase_change(now, outcome.phase, next);
        }
        observer.on_tick_end(now, outcome.phase);
        if now.is_multiple_of(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.view());
        }
    }
}
