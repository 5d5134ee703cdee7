//! Session state: viewport history, cached frame, and the renderer tying them together.

use crate::cache::RenderCache;
use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::geometry::{PixelPoint, Rectangle, ScreenRect};
use crate::input::ZoomOutMode;
use crate::render::{MandelbrotRenderer, PixelBuffer, Render};
use crate::surface::Surface;
use crate::viewport::ViewportStack;

/// Every mutation goes through `&mut self`, so a zoom can never interleave
/// with a render in flight.
pub struct Explorer<R: Render = MandelbrotRenderer> {
    viewports: ViewportStack,
    cache: RenderCache,
    renderer: R,
}

impl Explorer<MandelbrotRenderer> {
    pub fn new(config: &ExplorerConfig) -> Self {
        Self::with_renderer(config, MandelbrotRenderer::new(config.escape_params()))
    }
}

impl<R: Render> Explorer<R> {
    pub fn with_renderer(config: &ExplorerConfig, renderer: R) -> Self {
        Self {
            viewports: ViewportStack::new(
                config.initial_viewport,
                config.history_cap,
                config.history_overflow,
            ),
            cache: RenderCache::new(),
            renderer,
        }
    }

    pub fn viewport(&self) -> &Rectangle {
        self.viewports.current()
    }

    pub fn viewports(&self) -> &ViewportStack {
        &self.viewports
    }

    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Zoom to a dragged selection. Degenerate selections are ignored.
    pub fn zoom(&mut self, corner1: PixelPoint, corner2: PixelPoint, screen: ScreenRect) -> bool {
        let changed = self.viewports.zoom(corner1, corner2, screen);
        self.after_mutation(changed);
        changed
    }

    pub fn zoom_out(&mut self, mode: ZoomOutMode) -> bool {
        let changed = match mode {
            ZoomOutMode::Single => self.viewports.zoom_out(),
            ZoomOutMode::All => self.viewports.zoom_out_all(),
        };
        self.after_mutation(changed);
        changed
    }

    /// The frame for the current viewport at `screen` size.
    pub fn frame(&mut self, screen: ScreenRect) -> &PixelBuffer {
        self.cache.display(&self.renderer, screen, self.viewports.current())
    }

    /// Render if needed, then hand the frame to `surface`.
    pub fn present<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        let (width, height) = surface.size();
        let frame = self.frame(ScreenRect::sized(width, height));
        surface.blit(frame)
    }

    fn after_mutation(&mut self, changed: bool) {
        if !changed {
            return;
        }
        self.cache.invalidate();
        let v = self.viewports.current();
        log::info!(
            "viewport [{}, {}] x [{}, {}], depth {}",
            v.left,
            v.right,
            v.bottom,
            v.top,
            self.viewports.depth()
        );
    }
}
