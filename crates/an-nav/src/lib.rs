//! `an-nav`: the navigation state machine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`phase`]       | `Phase` enum (`Explore`, `Pause`, `Return`)                |
//! | [`recorder`]    | `PathRecorder`: exploration trail and return queue        |
//! | [`return_path`] | `plan_return_path`: straight-line path integration home   |
//! | [`machine`]     | `NavigationStateMachine`, `StepOutcome`                    |
//!
//! # Phases
//!
//! ```text
//!   Explore ──(dist to shelf < contact_threshold)──▶ Pause
//!   Pause   ──(pause counter > pause_dwell_ticks)──▶ Return   (plan return path)
//!   Return  ──(terminal: pops one point per tick, idles once empty)
//! ```

pub mod machine;
pub mod phase;
pub mod recorder;
pub mod return_path;


pub use machine::{NavigationStateMachine, StepOutcome};
pub use phase::Phase;
pub use recorder::PathRecorder;
pub use return_path::plan_return_path;
