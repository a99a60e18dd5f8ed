use crate::devices::framebuffer::{Color, FrameBuffer, PixelFormat};
use crate::error::{GfxError, Result};

/// Borrowed image in the same packing as the surface it is drawn to:
/// row-major, top row first, no padding between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixmap<'a> {
    width: u16,
    height: u16,
    format: PixelFormat,
    pixels: &'a [u8],
}

impl<'a> Pixmap<'a> {
    pub fn new(width: u16, height: u16, format: PixelFormat, pixels: &'a [u8]) -> Result<Self> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(GfxError::SizeMismatch);
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// `pixels` must already hold exactly `width * height` pixels
    pub(crate) const fn from_raw(width: u16, height: u16, format: PixelFormat, pixels: &'a [u8]) -> Self {
        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let offset = (y as usize * self.width as usize + x as usize) * bpp;
        Some(self.format.load(&self.pixels[offset..offset + bpp]))
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Copy `pixmap` with its top-left corner at `(x, y)`, skipping every
    /// source pixel equal to the format's transparent color key.
    pub fn draw_pixmap(&mut self, x: i64, y: i64, pixmap: &Pixmap<'_>) -> Result<()> {
        let format = self.format();
        if pixmap.format() != format {
            return Err(GfxError::FormatMismatch);
        }
        if pixmap.width() == 0 {
            return Ok(());
        }

        let key = format.transparent().raw();
        let bpp = format.bytes_per_pixel();
        let row_len = pixmap.width() as usize * bpp;

        for (sy, row) in pixmap.pixels().chunks_exact(row_len).enumerate() {
            let dy = y.saturating_add(sy as i64);
            if dy < 0 || dy >= self.height() as i64 {
                continue;
            }
            for (sx, px) in row.chunks_exact(bpp).enumerate() {
                let value = format.load(px).raw();
                if value == key {
                    continue; // transparent
                }
                self.put_raw(x.saturating_add(sx as i64), dy, value);
            }
        }
        Ok(())
    }
}
