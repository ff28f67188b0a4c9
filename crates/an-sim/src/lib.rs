//! `an-sim`: the pull-based driver that renderers talk to.
//!
//! # Tick contract
//!
//! ```text
//! renderer frame:
//!   state = driver.tick()        // exactly one NavigationStateMachine::step
//!   draw(state.position, state.exploration_path, state.return_path)
//! ```
//!
//! The driver never stops on its own: a finished lap simply idles.  The
//! caller decides how many frames to request, either by calling
//! [`SimulationDriver::tick`] directly or through the bounded
//! [`run`][SimulationDriver::run] / [`run_ticks`][SimulationDriver::run_ticks]
//! loops, which report progress to a [`SimObserver`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use an_core::{NavConfig, SimConfig};
//! use an_sim::{NoopObserver, SimBuilder};
//!
//! let mut driver = SimBuilder::new(NavConfig::default(), SimConfig::default())
//!     .seed(42)
//!     .build()?;
//! driver.run(&mut NoopObserver);
//! println!("{:?}", driver.view().phase);
//! ```

pub mod builder;
pub mod driver;
pub mod observer;
pub mod snapshot;


pub use builder::SimBuilder;
pub use driver::SimulationDriver;
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::{CurrentState, StateView};
