//! Escape-time Mandelbrot explorer with rectangle zoom and zoom-out history.
//!
//! The window and the event loop live in the binary. This library holds the
//! math, the viewport history and the frame cache, so it runs headless.

pub mod cache;
pub mod config;
pub mod error;
pub mod escape;
pub mod explorer;
pub mod geometry;
pub mod input;
pub mod render;
pub mod surface;
pub mod viewport;

pub use cache::{CacheState, RenderCache};
pub use config::ExplorerConfig;
pub use error::{ExplorerError, Result};
pub use escape::{escape, EscapeParams, EscapeStart};
pub use explorer::Explorer;
pub use geometry::{plane_to_screen, screen_to_plane, PixelPoint, Point, Rectangle, ScreenRect};
pub use input::{ClickCounter, DragGesture, ZoomOutMode};
pub use render::{MandelbrotRenderer, PixelBuffer, Render};
pub use surface::Surface;
pub use viewport::{HistoryOverflow, ViewportStack};
