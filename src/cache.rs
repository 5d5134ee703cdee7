//! Keeps the last rendered frame until the viewport or the screen size changes.

use crate::geometry::{Rectangle, ScreenRect};
use crate::render::{PixelBuffer, Render};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing rendered yet.
    Empty,
    /// The buffer no longer matches the viewport.
    Dirty,
    /// The buffer matches the viewport it was rendered for.
    Clean,
}

pub struct RenderCache {
    state: CacheState,
    /// Zero-sized until the first render.
    buffer: PixelBuffer,
    renders: u64,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderCache {
    pub fn new() -> Self {
        Self {
            state: CacheState::Empty,
            buffer: PixelBuffer::new(0, 0),
            renders: 0,
        }
    }

    pub fn state(&self) -> CacheState {
        self.state
    }

    /// Force the next [`display`](Self::display) to render.
    pub fn invalidate(&mut self) {
        if self.state == CacheState::Clean {
            self.state = CacheState::Dirty;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.state != CacheState::Clean
    }

    /// How many times the renderer has been invoked.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Frame for `viewport` at `screen` size, rendering only when the cached
    /// one is dirty or was sized for a different screen.
    pub fn display<R: Render + ?Sized>(
        &mut self,
        renderer: &R,
        screen: ScreenRect,
        viewport: &Rectangle,
    ) -> &PixelBuffer {
        let stale = match self.state {
            CacheState::Clean => !self.buffer.has_size(screen.width, screen.height),
            CacheState::Dirty | CacheState::Empty => true,
        };
        if stale {
            self.redraw(renderer, screen, viewport);
            self.state = CacheState::Clean;
        }
        &self.buffer
    }

    fn redraw<R: Render + ?Sized>(
        &mut self,
        renderer: &R,
        screen: ScreenRect,
        viewport: &Rectangle,
    ) {
        if self.buffer.has_size(screen.width, screen.height) {
            self.buffer.clear();
        } else {
            log::debug!("allocating {}x{} frame", screen.width, screen.height);
            self.buffer = PixelBuffer::new(screen.width, screen.height);
        }
        let start = Instant::now();
        renderer.render(&mut self.buffer, screen, viewport);
        self.renders += 1;
        log::debug!(
            "rendered {}x{} in {:.1} ms",
            screen.width,
            screen.height,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }
}
