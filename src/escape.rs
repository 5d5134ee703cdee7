//! Escape-time test for a single point of the plane.

use crate::geometry::{Point, Rectangle};
use serde::{Deserialize, Serialize};

/// Seed of the `z -> z^2 + c` recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeStart {
    /// `z0 = 0`, the critical point. This is the standard Mandelbrot definition.
    #[default]
    Origin,
    /// `z0 = c`. Shifts every escape count down by one; kept for comparison.
    Point,
}

/// Escape-time parameters shared by every pixel of a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeParams {
    pub max_iterations: u32,
    /// Divergence threshold. Independent of the visible viewport so zooming
    /// never changes escape counts.
    pub bounds: Rectangle,
    pub start: EscapeStart,
}

impl EscapeParams {
    #[inline(always)]
    pub fn escape(&self, c: Point) -> u32 {
        escape_from(c, self.max_iterations, &self.bounds, self.start)
    }
}

/// Iterations until `z` leaves `bounds`, starting from `z0 = 0`.
///
/// Returns the 0-based index of the first step that lands outside `bounds`, or
/// `max_iterations` if all `max_iterations + 1` steps stay inside.
#[inline(always)]
pub fn escape(c: Point, max_iterations: u32, bounds: &Rectangle) -> u32 {
    escape_from(c, max_iterations, bounds, EscapeStart::Origin)
}

#[inline(always)]
pub fn escape_from(c: Point, max_iterations: u32, bounds: &Rectangle, start: EscapeStart) -> u32 {
    let (mut a, mut b) = match start {
        EscapeStart::Origin => (0.0, 0.0),
        EscapeStart::Point => (c.x, c.y),
    };
    for i in 0..=max_iterations {
        let next_a = a * a - b * b + c.x;
        let next_b = 2.0 * a * b + c.y;
        if !bounds.contains(next_a, next_b) {
            return i;
        }
        a = next_a;
        b = next_b;
    }
    max_iterations
}
