//! `an-core`: foundational types for the `ant_nav` warehouse robot simulator.
//!
//! This crate is a dependency of every other `an-*` crate.  It has no `an-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`geo`]      | `Vec2`, `Pose`                                        |
//! | [`config`]   | `NavConfig` (warehouse layout and motion constants)   |
//! | [`time`]     | `Tick`, `FrameClock`, `SimConfig`                     |
//! | [`rng`]      | `NoiseSource`, `SimRng` (seedable), `NoNoise`         |
//! | [`error`]    | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and geometry.     |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MAX_RETURN_WAYPOINTS, NavConfig};
pub use error::{NavError, NavResult};
pub use geo::{Pose, Vec2};
pub use rng::{NoNoise, NoiseSource, SimRng};
pub use time::{FrameClock, SimConfig, Tick};
