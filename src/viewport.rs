//! Current viewport plus a bounded zoom-out history.

use crate::geometry::{screen_to_plane, PixelPoint, Rectangle, ScreenRect};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What a zoom does once the history is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryOverflow {
    /// The zoom still applies but the previous viewport is not recorded.
    #[default]
    DropNewest,
    /// Forget the oldest recorded viewport to make room.
    EvictOldest,
}

pub struct ViewportStack {
    current: Rectangle,
    /// Front is the most recent entry.
    history: VecDeque<Rectangle>,
    cap: usize,
    overflow: HistoryOverflow,
    epoch: u64,
}

impl ViewportStack {
    pub fn new(initial: Rectangle, cap: usize, overflow: HistoryOverflow) -> Self {
        Self {
            current: initial,
            history: VecDeque::new(),
            cap,
            overflow,
            epoch: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Rectangle {
        &self.current
    }

    /// Number of viewports reachable through zoom-out.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Increments whenever the current viewport changes.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Zoom into the rectangle spanned by two screen corners, in any order.
    ///
    /// Returns `false` and leaves the stack alone when the selection maps to a
    /// zero-area (or non-finite) region.
    pub fn zoom(&mut self, corner1: PixelPoint, corner2: PixelPoint, screen: ScreenRect) -> bool {
        if screen.is_empty() {
            return false;
        }
        let (min_x, max_x) = (corner1.x.min(corner2.x), corner1.x.max(corner2.x));
        let (min_y, max_y) = (corner1.y.min(corner2.y), corner1.y.max(corner2.y));
        let top_left = screen_to_plane(min_x, min_y, screen, &self.current);
        let bottom_right = screen_to_plane(max_x, max_y, screen, &self.current);
        let next = Rectangle::new(top_left.x, bottom_right.x, bottom_right.y, top_left.y);
        if !next.is_valid() {
            log::debug!("ignoring degenerate zoom {corner1:?} -> {corner2:?}");
            return false;
        }
        self.push(self.current);
        self.current = next;
        self.epoch += 1;
        true
    }

    /// Return to the previous viewport. Returns `false` when there is none.
    pub fn zoom_out(&mut self) -> bool {
        match self.history.pop_front() {
            Some(prev) => {
                self.current = prev;
                self.epoch += 1;
                true
            }
            None => false,
        }
    }

    /// Jump to the oldest retained viewport and forget the rest.
    pub fn zoom_out_all(&mut self) -> bool {
        match self.history.pop_back() {
            Some(oldest) => {
                self.current = oldest;
                self.history.clear();
                self.epoch += 1;
                true
            }
            None => false,
        }
    }

    fn push(&mut self, rect: Rectangle) {
        if self.cap == 0 {
            return;
        }
        if self.history.len() >= self.cap {
            match self.overflow {
                HistoryOverflow::DropNewest => return,
                HistoryOverflow::EvictOldest => {
                    self.history.pop_back();
                }
            }
        }
        self.history.push_front(rect);
    }
}
