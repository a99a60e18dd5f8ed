//! # Rasterizer
//!
//! Drawing primitives over any [`FrameBuffer`](crate::devices::framebuffer::FrameBuffer).
//!
//! ## Primitives
//!
//! - `line`: integer Bresenham segments in all eight octants
//! - `rect`: filled axis-aligned rectangles
//! - `circle`: midpoint circle outlines
//! - `polygon`: even-odd scanline polygon fill
//! - `pixmap`: color-keyed pixmap blits
//!
//! ## Clipping
//!
//! Every primitive clips on write: pixels that fall outside the surface are
//! dropped and the call still succeeds. Colors are checked against the
//! surface format once, before anything is written, so a rejected call
//! never leaves a half-drawn shape behind.

pub mod circle;
pub mod line;
pub mod pixmap;
pub mod polygon;
pub mod rect;

pub use pixmap::Pixmap;

/// Polygon vertex. Signed so shapes may start off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Vector2D {
    pub x: i64,
    pub y: i64,
}

impl Vector2D {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Vector2D {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::devices::framebuffer::{Color, FrameBuffer, PixelFormat};
    use alloc::vec::Vec;

    pub const INK: Color = Color::Indexed(7);

    pub fn canvas(width: usize, height: usize) -> FrameBuffer {
        FrameBuffer::new(width, height, PixelFormat::Indexed).unwrap()
    }

    /// Coordinates of every pixel that isn't zero, row by row
    pub fn lit(fb: &FrameBuffer) -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        for y in 0..fb.height() as i64 {
            for x in 0..fb.width() as i64 {
                if fb.get_pixel(x, y) != Ok(Color::Indexed(0)) {
                    out.push((x, y));
                }
            }
        }
        out
    }
}
