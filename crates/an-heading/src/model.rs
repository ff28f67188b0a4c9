//! [`HeadingModel`]: one step of the biased random walk.

use an_core::{NavConfig, NoiseSource, Pose, Vec2};
use tracing::trace;

/// Computes the next pose from the current one during exploration.
///
/// Holds only constants copied out of [`NavConfig`]; it has no mutable state
/// and can be shared freely.  The sole side effect of
/// [`compute`][Self::compute] is the draw from the supplied noise source.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingModel {
    target:          Vec2,
    step_size:       f64,
    smoothing:       f64,
    noise_amplitude: f64,
}

impl HeadingModel {
    /// Build a model that steers toward `config.shelf`.
    ///
    /// Assumes `config` has been validated.
    pub fn new(config: &NavConfig) -> Self {
        Self {
            target:          config.shelf,
            step_size:       config.step_size,
            smoothing:       config.heading_smoothing,
            noise_amplitude: config.noise_amplitude,
        }
    }

    /// Blend `heading` toward the bearing from `position` to the target.
    ///
    /// This is the noise-free part of the update.
    #[inline]
    pub fn biased_heading(&self, position: Vec2, heading: f64) -> f64 {
        let bearing = position.bearing_to(self.target);
        self.smoothing * heading + (1.0 - self.smoothing) * bearing
    }

    /// Advance `pose` by one exploration step.
    ///
    /// The returned position is exactly `step_size` from `pose.position` (up
    /// to rounding).  The returned heading is not wrapped.
    pub fn compute<N: NoiseSource>(&self, pose: Pose, noise: &mut N) -> Pose {
        let heading  = self.biased_heading(pose.position, pose.heading)
            + noise.perturbation(self.noise_amplitude);
        let position = pose.position + Vec2::from_angle(heading) * self.step_size;

        trace!(x = position.x, y = position.y, heading, "heading step");
        Pose::new(position, heading)
    }
}
