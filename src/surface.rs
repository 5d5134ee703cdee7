use crate::error::Result;
use crate::render::PixelBuffer;

/// Where finished frames are shown.
pub trait Surface {
    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);
    /// Copy `frame` to the display.
    fn blit(&mut self, frame: &PixelBuffer) -> Result<()>;
}
