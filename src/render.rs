//! Escape-time rendering into an RGBA pixel buffer.

use crate::escape::EscapeParams;
use crate::geometry::{screen_to_plane, Rectangle, ScreenRect};
use rayon::prelude::*;

pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA8 grid. Fresh buffers are fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.index(x, y)?;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[idx..idx + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Write one pixel; out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

/// Anything that can fill a buffer for a viewport.
pub trait Render {
    /// Paint `viewport` into `buffer`, which is already sized to `screen`.
    fn render(&self, buffer: &mut PixelBuffer, screen: ScreenRect, viewport: &Rectangle);
}

/// Grayscale-by-iteration Mandelbrot renderer.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotRenderer {
    pub params: EscapeParams,
}

impl MandelbrotRenderer {
    pub fn new(params: EscapeParams) -> Self {
        Self { params }
    }
}

impl Render for MandelbrotRenderer {
    fn render(&self, buffer: &mut PixelBuffer, screen: ScreenRect, viewport: &Rectangle) {
        render(buffer, screen, viewport, &self.params);
    }
}

/// Opaque gray from an escape count. Counts wrap every 256 iterations.
#[inline(always)]
pub fn gray(iterations: u32) -> [u8; 4] {
    let v = (iterations % 256) as u8;
    [v, v, v, 0xFF]
}

/// Evaluate every pixel of `screen` and write escaped points into `buffer`.
/// Points that never escape are left untouched.
pub fn render(
    buffer: &mut PixelBuffer,
    screen: ScreenRect,
    viewport: &Rectangle,
    params: &EscapeParams,
) {
    if screen.is_empty() {
        return;
    }
    // The buffer may be smaller than the screen; never write past it.
    let width = screen.width.min(buffer.width()) as usize;
    let rows = screen.height.min(buffer.height()) as usize;
    let row_bytes = buffer.width() as usize * BYTES_PER_PIXEL;
    if width == 0 || rows == 0 {
        return;
    }

    // Each row is an independent disjoint slice, so rows render in parallel.
    buffer
        .as_bytes_mut()
        .par_chunks_exact_mut(row_bytes)
        .take(rows)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let c = screen_to_plane(x as i32, y as i32, screen, viewport);
                let i = params.escape(c);
                if i == params.max_iterations {
                    continue;
                }
                let idx = x * BYTES_PER_PIXEL;
                row[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&gray(i));
            }
        });
}
