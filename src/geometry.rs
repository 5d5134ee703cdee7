//! Plane and pixel coordinate types, plus the affine mapping between them.

use serde::{Deserialize, Serialize};

/// A coordinate in plane space or pixel space, depending on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned region of the complex plane. `left < right` and `bottom < top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Rectangle {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Strict open-interval membership on both axes.
    #[inline(always)]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.left < x && x < self.right) && (self.bottom < y && y < self.top)
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains(p.x, p.y)
    }

    /// False for zero-area, inverted, or NaN bounds.
    pub fn is_valid(&self) -> bool {
        self.left < self.right && self.bottom < self.top
    }
}

/// Pixel-space extent of the display. Not owned by the core; passed per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Screen anchored at the origin, the usual shape of a window's client area.
    pub const fn sized(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Screen point reported by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Map a pixel to the plane. Pixel rows grow downward while plane `y` grows
/// upward, hence the flip. `screen` must have non-zero dimensions.
#[inline(always)]
pub fn screen_to_plane(px: i32, py: i32, screen: ScreenRect, viewport: &Rectangle) -> Point {
    let sw = screen.width as f64;
    let sh = screen.height as f64;
    Point {
        x: viewport.left + (px - screen.x) as f64 * viewport.width() / sw,
        y: viewport.bottom + (sh - py as f64) * viewport.height() / sh,
    }
}

/// Inverse of [`screen_to_plane`], returning fractional pixel coordinates.
pub fn plane_to_screen(p: Point, screen: ScreenRect, viewport: &Rectangle) -> (f64, f64) {
    let sw = screen.width as f64;
    let sh = screen.height as f64;
    let px = screen.x as f64 + (p.x - viewport.left) * sw / viewport.width();
    let py = sh - (p.y - viewport.bottom) * sh / viewport.height();
    (px, py)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn initial() -> Rectangle {
        Rectangle::new(-2.0, 2.0, -1.5, 1.5)
    }

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < EPS, "x: {} vs {}", p.x, x);
        assert!((p.y - y).abs() < EPS, "y: {} vs {}", p.y, y);
    }

    #[test]
    fn test_known_pixels_on_default_window() {
        let screen = ScreenRect::sized(800, 600);
        let vp = initial();
        assert_close(screen_to_plane(0, 0, screen, &vp), -2.0, 1.5);
        assert_close(screen_to_plane(400, 300, screen, &vp), 0.0, 0.0);
        assert_close(screen_to_plane(800, 600, screen, &vp), 2.0, -1.5);
    }

    #[test]
    fn test_corners_round_trip() {
        let screens = [
            ScreenRect::sized(800, 600),
            ScreenRect::sized(1, 1),
            ScreenRect::new(13, 7, 333, 97),
        ];
        let vp = Rectangle::new(-0.75, -0.70, 0.1, 0.13);
        for screen in screens {
            let xs = [screen.x, screen.x + screen.width as i32];
            let ys = [0, screen.height as i32];
            for &px in &xs {
                for &py in &ys {
                    let p = screen_to_plane(px, py, screen, &vp);
                    let (bx, by) = plane_to_screen(p, screen, &vp);
                    assert!((bx - px as f64).abs() < 1e-6, "{screen:?} x {px} -> {bx}");
                    assert!((by - py as f64).abs() < 1e-6, "{screen:?} y {py} -> {by}");
                }
            }
        }
    }

    #[test]
    fn test_screen_offset_only_shifts_x() {
        let vp = initial();
        let p = screen_to_plane(10, 0, ScreenRect::new(10, 50, 800, 600), &vp);
        assert_close(p, -2.0, 1.5);
    }

    #[test]
    fn test_contains_is_strict() {
        let r = Rectangle::new(-1.0, 1.0, -1.0, 1.0);
        assert!(r.contains(0.0, 0.0));
        assert!(!r.contains(1.0, 0.0));
        assert!(!r.contains(0.0, -1.0));
        assert!(!r.contains_point(Point::new(2.0, 0.0)));
    }

    #[test]
    fn test_rectangle_validity() {
        assert!(initial().is_valid());
        assert!(!Rectangle::new(1.0, 1.0, 0.0, 1.0).is_valid());
        assert!(!Rectangle::new(0.0, 1.0, 2.0, 1.0).is_valid());
        assert!(!Rectangle::new(f64::NAN, 1.0, 0.0, 1.0).is_valid());
        assert_eq!(initial().width(), 4.0);
        assert_eq!(initial().height(), 3.0);
    }
}
