//! Turns raw pointer events into the two signals the explorer understands.

use crate::geometry::PixelPoint;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomOutMode {
    /// Back one step.
    Single,
    /// Back to the oldest retained viewport.
    All,
}

/// Tracks a press-drag-release gesture.
#[derive(Debug, Default)]
pub struct DragGesture {
    anchor: Option<PixelPoint>,
}

impl DragGesture {
    pub fn press(&mut self, at: PixelPoint) {
        self.anchor = Some(at);
    }

    /// Completes the drag, yielding both corners if a press was recorded.
    pub fn release(&mut self, at: PixelPoint) -> Option<(PixelPoint, PixelPoint)> {
        self.anchor.take().map(|start| (start, at))
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
    }
}

/// Classifies secondary clicks as single or double.
#[derive(Debug)]
pub struct ClickCounter {
    window: Duration,
    last: Option<Instant>,
}

impl ClickCounter {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn click_at(&mut self, now: Instant) -> ZoomOutMode {
        match self.last.take() {
            Some(prev) if now.saturating_duration_since(prev) <= self.window => ZoomOutMode::All,
            _ => {
                self.last = Some(now);
                ZoomOutMode::Single
            }
        }
    }

    pub fn click(&mut self) -> ZoomOutMode {
        self.click_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_yields_both_corners() {
        let mut drag = DragGesture::default();
        assert_eq!(drag.release(PixelPoint::new(1, 1)), None);
        drag.press(PixelPoint::new(10, 20));
        assert!(drag.is_active());
        assert_eq!(
            drag.release(PixelPoint::new(30, 5)),
            Some((PixelPoint::new(10, 20), PixelPoint::new(30, 5)))
        );
        assert!(!drag.is_active());
    }

    #[test]
    fn test_cancelled_drag_yields_nothing() {
        let mut drag = DragGesture::default();
        drag.press(PixelPoint::new(10, 20));
        drag.cancel();
        assert_eq!(drag.release(PixelPoint::new(30, 5)), None);
    }

    #[test]
    fn test_click_counter() {
        let mut clicks = ClickCounter::new(Duration::from_millis(400));
        let t0 = Instant::now();
        assert_eq!(clicks.click_at(t0), ZoomOutMode::Single);
        assert_eq!(clicks.click_at(t0 + Duration::from_millis(150)), ZoomOutMode::All);
        // A third quick click starts a new sequence.
        assert_eq!(clicks.click_at(t0 + Duration::from_millis(300)), ZoomOutMode::Single);
        assert_eq!(clicks.click_at(t0 + Duration::from_millis(1000)), ZoomOutMode::Single);
    }
}
