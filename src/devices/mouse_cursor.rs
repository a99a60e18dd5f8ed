//! # Mouse Cursor
//!
//! Builds the stock arrow sprite for any pixel format, with the format's
//! color key filling everything outside the arrow. Where the pointer is
//! comes from the caller.

use crate::devices::framebuffer::{Color, PixelFormat, Rgb};
use crate::error::Result;
use crate::graphics::Pixmap;
use alloc::vec::Vec;

/// Palette index drawn as white in the default VGA palette
pub const INDEXED_WHITE: u8 = 0x0F;

const ARROW_WIDTH: usize = 12;
const ARROW_HEIGHT: usize = 19;

/// 0 = transparent, 1 = outline, 2 = fill
#[rustfmt::skip]
const ARROW: [[u8; ARROW_WIDTH]; ARROW_HEIGHT] = [
    [1,0,0,0,0,0,0,0,0,0,0,0],
    [1,1,0,0,0,0,0,0,0,0,0,0],
    [1,2,1,0,0,0,0,0,0,0,0,0],
    [1,2,2,1,0,0,0,0,0,0,0,0],
    [1,2,2,2,1,0,0,0,0,0,0,0],
    [1,2,2,2,2,1,0,0,0,0,0,0],
    [1,2,2,2,2,2,1,0,0,0,0,0],
    [1,2,2,2,2,2,2,1,0,0,0,0],
    [1,2,2,2,2,2,2,2,1,0,0,0],
    [1,2,2,2,2,2,2,2,2,1,0,0],
    [1,2,2,2,2,2,2,2,2,2,1,0],
    [1,2,2,2,2,2,2,1,1,1,1,1],
    [1,2,2,2,1,2,2,1,0,0,0,0],
    [1,2,2,1,0,1,2,2,1,0,0,0],
    [1,2,1,0,0,1,2,2,1,0,0,0],
    [1,1,0,0,0,0,1,2,2,1,0,0],
    [1,0,0,0,0,0,1,2,2,1,0,0],
    [0,0,0,0,0,0,0,1,2,2,1,0],
    [0,0,0,0,0,0,0,1,1,1,1,0],
];

/// An owned image, usually a cursor, drawn through [`Sprite::as_pixmap`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u16,
    height: u16,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl Sprite {
    /// Take ownership of packed pixel data
    pub fn new(width: u16, height: u16, format: PixelFormat, pixels: Vec<u8>) -> Result<Self> {
        Pixmap::new(width, height, format, &pixels)?;
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// The stock arrow with explicit outline and fill colors
    pub fn arrow_with(format: PixelFormat, outline: Color, fill: Color) -> Result<Self> {
        let outline = format.check(outline)?;
        let fill = format.check(fill)?;
        let key = format.transparent().raw();
        let bpp = format.bytes_per_pixel();

        let mut pixels = Vec::with_capacity(ARROW_WIDTH * ARROW_HEIGHT * bpp);
        let mut px = [0u8; 2];
        for row in ARROW.iter() {
            for &cell in row.iter() {
                let raw = match cell {
                    0 => key,
                    1 => outline,
                    _ => fill,
                };
                format.store(&mut px[..bpp], raw);
                pixels.extend_from_slice(&px[..bpp]);
            }
        }

        Self::new(ARROW_WIDTH as u16, ARROW_HEIGHT as u16, format, pixels)
    }

    /// Black-outlined white arrow
    pub fn arrow(format: PixelFormat) -> Result<Self> {
        let fill = match format {
            PixelFormat::Indexed => Color::Indexed(INDEXED_WHITE),
            PixelFormat::Direct { .. } => format.convert(Rgb::WHITE)?,
        };
        Self::arrow_with(format, format.black(), fill)
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn as_pixmap(&self) -> Pixmap<'_> {
        Pixmap::from_raw(self.width, self.height, self.format, &self.pixels)
    }
}
