//! Observer trait for renderers, trace writers and progress reporting.

use an_core::Tick;
use an_nav::Phase;

use crate::StateView;

/// Callbacks invoked by [`SimulationDriver::run`][crate::SimulationDriver::run]
/// and [`run_ticks`][crate::SimulationDriver::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: transition printer
///
/// ```rust,ignore
/// struct Transitions;
///
/// impl SimObserver for Transitions {
///     fn on_phase_change(&mut self, tick: Tick, from: Phase, to: Phase) {
///         println!("{tick}: {from} -> {to}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the tick is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when the tick processed at `tick` moved the machine from
    /// `from` to `to`.  Fires before `on_tick_end` for the same tick.
    fn on_phase_change(&mut self, _tick: Tick, _from: Phase, _to: Phase) {}

    /// Called after every tick.  `phase` is the phase whose handler ran.
    fn on_tick_end(&mut self, _tick: Tick, _phase: Phase) {}

    /// Called every `SimConfig::output_interval_ticks` ticks with the state
    /// as it stands after the tick.
    fn on_snapshot(&mut self, _tick: Tick, _state: &StateView<'_>) {}

    /// Called once when `run` finishes its frame budget.
    fn on_sim_end(&mut self, _final_tick: Tick, _state: &StateView<'_>) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
