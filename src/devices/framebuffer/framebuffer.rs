//! Linear framebuffer surface with embedded-graphics support
use crate::devices::framebuffer::color::Color;
use crate::devices::framebuffer::pixel::PixelFormat;
use crate::error::{GfxError, InitError, Result};
use alloc::vec::Vec;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb888,
    Pixel,
};

/// One renderable surface: `height` rows of `stride` bytes each.
///
/// `B` is the backing storage. Off-screen buffers own a `Vec<u8>`; the
/// physical surface borrows mapped video memory as `&mut [u8]`.
#[derive(Debug)]
pub struct FrameBuffer<B = Vec<u8>> {
    data: B,
    width: usize,
    height: usize,
    stride: usize,
    format: PixelFormat,
}

impl FrameBuffer<Vec<u8>> {
    /// Allocate a zeroed buffer with the tightest stride for `width`
    pub fn new(width: usize, height: usize, format: PixelFormat) -> core::result::Result<Self, InitError> {
        let stride = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(InitError::BadGeometry)?;
        Self::with_stride(width, height, stride, format)
    }

    /// Allocate a zeroed buffer with an explicit stride in bytes
    pub fn with_stride(
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
    ) -> core::result::Result<Self, InitError> {
        let len = Self::required_len(width, height, stride, format)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| InitError::OutOfMemory)?;
        data.resize(len, 0);

        Ok(Self {
            data,
            width,
            height,
            stride,
            format,
        })
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Wrap existing storage. Storage may be longer than `stride * height`;
    /// the tail is never touched.
    pub fn from_storage(
        data: B,
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
    ) -> core::result::Result<Self, InitError> {
        let needed = Self::required_len(width, height, stride, format)?;
        let got = data.as_ref().len();
        if got < needed {
            return Err(InitError::VramTooSmall { needed, got });
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
            format,
        })
    }

    fn required_len(
        width: usize,
        height: usize,
        stride: usize,
        format: PixelFormat,
    ) -> core::result::Result<usize, InitError> {
        let row = width
            .checked_mul(format.bytes_per_pixel())
            .ok_or(InitError::BadGeometry)?;
        if stride < row {
            return Err(InitError::BadGeometry);
        }
        stride.checked_mul(height).ok_or(InitError::BadGeometry)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row, including padding
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    /// Size of the addressed region in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.stride * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        let len = self.len();
        &self.data.as_ref()[..len]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.data.as_mut()[..len]
    }

    /// Visible pixels of row `y`, without the stride padding
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        Some(&self.data.as_ref()[start..start + self.width * self.bytes_per_pixel()])
    }

    /// Whether `other` has the same width, height, stride and format
    pub fn same_geometry<C: AsRef<[u8]> + AsMut<[u8]>>(&self, other: &FrameBuffer<C>) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.stride == other.stride
            && self.format == other.format
    }

    /// Byte offset of `(x, y)`. Negative coordinates wrap to huge unsigned
    /// values and fail the same comparison as coordinates past the edge.
    #[inline]
    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        let (ux, uy) = (x as u64, y as u64);
        if ux >= self.width as u64 || uy >= self.height as u64 {
            None
        } else {
            Some(uy as usize * self.stride + ux as usize * self.bytes_per_pixel())
        }
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        let raw = self.format.check(color)?;
        let offset = self.offset(x, y).ok_or(GfxError::OutOfBounds)?;
        let bpp = self.bytes_per_pixel();
        self.format
            .store(&mut self.data.as_mut()[offset..offset + bpp], raw);
        Ok(())
    }

    pub fn get_pixel(&self, x: i64, y: i64) -> Result<Color> {
        let offset = self.offset(x, y).ok_or(GfxError::OutOfBounds)?;
        let bpp = self.bytes_per_pixel();
        Ok(self.format.load(&self.data.as_ref()[offset..offset + bpp]))
    }

    /// Write an already checked raw value; off-surface writes are dropped.
    /// Returns whether the pixel landed.
    #[inline]
    pub(crate) fn put_raw(&mut self, x: i64, y: i64, raw: u16) -> bool {
        match self.offset(x, y) {
            Some(offset) => {
                let bpp = self.bytes_per_pixel();
                self.format
                    .store(&mut self.data.as_mut()[offset..offset + bpp], raw);
                true
            }
            None => false,
        }
    }

    /// Fill `count` pixels of row `y` starting at column `x`. The span must
    /// already be clipped to the surface.
    #[inline]
    pub(crate) fn fill_span(&mut self, x: usize, y: usize, count: usize, raw: u16) {
        let bpp = self.bytes_per_pixel();
        let start = y * self.stride + x * bpp;
        let format = self.format;
        for px in self.data.as_mut()[start..start + count * bpp].chunks_exact_mut(bpp) {
            format.store(px, raw);
        }
    }

    /// Fill the entire surface with a color
    pub fn fill(&mut self, color: Color) -> Result<()> {
        let raw = self.format.check(color)?;
        for y in 0..self.height {
            self.fill_span(0, y, self.width, raw);
        }
        Ok(())
    }

    /// Full-surface copy from a buffer with identical geometry
    pub fn copy_from<C: AsRef<[u8]> + AsMut<[u8]>>(&mut self, src: &FrameBuffer<C>) -> Result<()> {
        if !self.same_geometry(src) {
            return Err(GfxError::SizeMismatch);
        }
        self.as_bytes_mut().copy_from_slice(src.as_bytes());
        Ok(())
    }
}

// Implement DrawTarget for embedded-graphics
impl<B: AsRef<[u8]> + AsMut<[u8]>> DrawTarget for FrameBuffer<B> {
    type Color = Rgb888;
    type Error = GfxError;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let format = self.format;
        for Pixel(Point { x, y }, color) in pixels {
            let raw = format.convert(color.into())?.raw();
            self.put_raw(x as i64, y as i64, raw);
        }
        Ok(())
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> OriginDimensions for FrameBuffer<B> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
