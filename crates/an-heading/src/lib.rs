//! `an-heading`: the exploration heading model.
//!
//! Each explore tick the robot blends its previous heading with the bearing
//! to the shelf (a first-order low-pass filter), jitters the result with
//! uniform noise, then advances one fixed step along the new heading:
//!
//! ```text
//! bearing  = atan2(shelf - position)
//! heading' = s * heading + (1 - s) * bearing + U(-a, a)
//! position' = position + step * (cos heading', sin heading')
//! ```
//!
//! With `s = 0.7`, `a = 0.3` this is the ant-style biased random walk the
//! demo animates.  Noise comes from an injected
//! [`NoiseSource`][an_core::NoiseSource] so runs can be seeded or made
//! fully deterministic.

pub mod model;

#[cfg(test)]
mod tests;

pub use model::HeadingModel;
