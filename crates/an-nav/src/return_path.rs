//! Straight-line path integration back to the dock.

use an_core::Vec2;

/// Discretise the segment `from → dock` into evenly spaced waypoints.
///
/// Produces `N = floor(|dock - from| / step_size)` points, point `i` being
/// `from + (dock - from) * (i / N)` for `i in 0..N`.  The first point is
/// `from` itself and the last stops one spacing short of the dock.  When
/// the robot is already within one step of the dock, `N = 0` and the path
/// is empty.
///
/// `step_size` must be positive; `NavConfig::validate` guarantees that.
pub fn plan_return_path(from: Vec2, dock: Vec2, step_size: f64) -> Vec<Vec2> {
    let direction = dock - from;
    let steps = (direction.length() / step_size).floor() as usize;

    (0..steps)
        .map(|i| from + direction * (i as f64 / steps as f64))
        .collect()
}
