//! Warehouse layout and motion constants.
//!
//! The defaults reproduce the reference run: a 20 × 20 warehouse centred on
//! the dock, shelf at (6, 7), 0.15-unit steps.

use crate::{NavError, NavResult, Vec2};

/// Upper bound on the number of waypoints a return leg may need.
///
/// Layouts whose worst-case return path exceeds this are rejected by
/// [`NavConfig::validate`], so planning never over-allocates.
pub const MAX_RETURN_WAYPOINTS: f64 = 1_000_000.0;

/// Layout and motion parameters for one navigation run.
///
/// Immutable for the lifetime of a simulation.  Validate with
/// [`NavConfig::validate`] (the sim builder does this for you).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// The warehouse floor spans `[-half_extent, half_extent]` on both axes.
    /// Dock, shelf and start pose must lie on it; the robot itself is not
    /// clamped while it walks.
    pub warehouse_half_extent: f64,

    /// Docking station: start of the run and target of the return leg.
    pub dock: Vec2,

    /// Storage shelf: target of the exploration leg.
    pub shelf: Vec2,

    /// Distance covered per explore tick, and spacing of the return path.
    pub step_size: f64,

    /// Exploration ends once the robot is strictly closer than this to the shelf.
    pub contact_threshold: f64,

    /// Pause ends on the pause tick where the counter first exceeds this.
    pub pause_dwell_ticks: u32,

    /// Weight kept on the previous heading in the low-pass heading update.
    /// The remaining `1 - heading_smoothing` goes to the bearing to the shelf.
    pub heading_smoothing: f64,

    /// Half-width of the uniform heading perturbation, radians.  Zero makes
    /// the walk fully deterministic.
    pub noise_amplitude: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            warehouse_half_extent: 10.0,
            dock:                  Vec2::new(0.0, 0.0),
            shelf:                 Vec2::new(6.0, 7.0),
            step_size:             0.15,
            contact_threshold:     0.3,
            pause_dwell_ticks:     20,
            heading_smoothing:     0.7,
            noise_amplitude:       0.3,
        }
    }
}

impl NavConfig {
    /// Reject constants that cannot drive a run.
    pub fn validate(&self) -> NavResult<()> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(NavError::config(format!(
                "step_size must be a positive finite number, got {}",
                self.step_size
            )));
        }
        if !(self.contact_threshold.is_finite() && self.contact_threshold > 0.0) {
            return Err(NavError::config(format!(
                "contact_threshold must be a positive finite number, got {}",
                self.contact_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.heading_smoothing) {
            return Err(NavError::config(format!(
                "heading_smoothing must lie in [0, 1], got {}",
                self.heading_smoothing
            )));
        }
        if !(self.noise_amplitude.is_finite() && self.noise_amplitude >= 0.0) {
            return Err(NavError::config(format!(
                "noise_amplitude must be a non-negative finite number, got {}",
                self.noise_amplitude
            )));
        }
        if !(self.warehouse_half_extent.is_finite() && self.warehouse_half_extent > 0.0) {
            return Err(NavError::config(format!(
                "warehouse_half_extent must be a positive finite number, got {}",
                self.warehouse_half_extent
            )));
        }
        if !self.dock.is_finite() {
            return Err(NavError::config(format!("dock must be finite, got {}", self.dock)));
        }
        if !self.shelf.is_finite() {
            return Err(NavError::config(format!("shelf must be finite, got {}", self.shelf)));
        }
        if !self.dock.within_square(self.warehouse_half_extent) {
            return Err(NavError::config(format!(
                "dock {} lies outside the warehouse (half extent {})",
                self.dock, self.warehouse_half_extent
            )));
        }
        if !self.shelf.within_square(self.warehouse_half_extent) {
            return Err(NavError::config(format!(
                "shelf {} lies outside the warehouse (half extent {})",
                self.shelf, self.warehouse_half_extent
            )));
        }
        let worst = self.worst_case_return_waypoints();
        if !(worst.is_finite() && worst <= MAX_RETURN_WAYPOINTS) {
            return Err(NavError::config(format!(
                "step_size {} is too small for this layout: a return leg could need {:e} waypoints (limit {:e})",
                self.step_size, worst, MAX_RETURN_WAYPOINTS
            )));
        }
        Ok(())
    }

    /// Upper bound on `N` for the return leg.
    ///
    /// Exploration ends strictly inside `contact_threshold` of the shelf, so
    /// the pause position is less than `contact_threshold + |shelf - dock|`
    /// from the dock.
    pub fn worst_case_return_waypoints(&self) -> f64 {
        ((self.contact_threshold + self.shelf.distance(self.dock)) / self.step_size).floor()
    }

    /// Shorthand for a copy with the heading perturbation switched off.
    pub fn without_noise(mut self) -> Self {
        self.noise_amplitude = 0.0;
        self
    }
}
