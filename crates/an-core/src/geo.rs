//! Planar geometry for the warehouse floor.
//!
//! Coordinates are unit-less "warehouse units" stored as `f64`.  Headings are
//! radians measured counter-clockwise from +x and are never wrapped into a
//! fixed range; every consumer goes through `cos`/`sin`/`atan2`.

use std::ops::{Add, Mul, Sub};

/// A point or displacement on the warehouse floor.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Angle of the ray from `self` to `target`, in `(-π, π]`.
    #[inline]
    pub fn bearing_to(self, target: Vec2) -> f64 {
        (target.y - self.y).atan2(target.x - self.x)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `true` if both coordinates lie within `[-half_extent, half_extent]`.
    #[inline]
    pub fn within_square(self, half_extent: f64) -> bool {
        self.x.abs() <= half_extent && self.y.abs() <= half_extent
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Pose ──────────────────────────────────────────────────────────────────────

/// Robot position plus heading.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec2,
    /// Radians; unbounded.
    pub heading: f64,
}

impl Pose {
    #[inline]
    pub const fn new(position: Vec2, heading: f64) -> Self {
        Self { position, heading }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.position.is_finite() && self.heading.is_finite()
    }
}
