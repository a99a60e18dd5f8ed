//! # Pixel Formats
//!
//! Describes how a [`Color`] is laid out in memory and converts 8-bit RGB
//! triples into the packed encoding of the active mode.
//!
//! Two layouts are supported:
//! - 8 bpp indexed: one byte per pixel holding a palette index
//! - 16 bpp direct: one little-endian `u16` per pixel with red, green and
//!   blue packed at the positions given by the mode (5:6:5 or 1:5:5:5)
//!
//! Conversion truncates each channel to its width. Going back with
//! [`PixelFormat::to_rgb`] only recovers the truncated value.

use super::color::{Color, Rgb};
use crate::error::{GfxError, InitError, Result};

/// Palette index reserved as the blit color key in indexed modes
pub const INDEXED_TRANSPARENT: u8 = 0x00;
/// Palette index used for black, since index 0 is taken by the color key
pub const INDEXED_BLACK: u8 = 0xFF;
/// Packed value reserved as the blit color key in direct modes
pub const DIRECT_TRANSPARENT: u16 = 0x47E0;

/// Size and bit position of one color channel in a packed pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub size: u8,
    pub position: u8,
}

impl Channel {
    pub const fn new(size: u8, position: u8) -> Self {
        Self { size, position }
    }

    /// Bits covered by this channel
    pub const fn mask(self) -> u32 {
        if self.size == 0 {
            0
        } else {
            ((1u32 << self.size) - 1) << self.position
        }
    }

    #[inline]
    fn pack(self, value: u8) -> u16 {
        (((value as u32) >> (8 - self.size)) << self.position) as u16
    }

    #[inline]
    fn unpack(self, raw: u16) -> u8 {
        let bits = (raw as u32 >> self.position) & ((1u32 << self.size) - 1);
        (bits << (8 - self.size)) as u8
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Indexed,
    Direct {
        red: Channel,
        green: Channel,
        blue: Channel,
    },
}

impl PixelFormat {
    pub const RGB565: PixelFormat = PixelFormat::Direct {
        red: Channel::new(5, 11),
        green: Channel::new(6, 5),
        blue: Channel::new(5, 0),
    };

    pub const RGB555: PixelFormat = PixelFormat::Direct {
        red: Channel::new(5, 10),
        green: Channel::new(5, 5),
        blue: Channel::new(5, 0),
    };

    #[inline]
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Indexed => 8,
            PixelFormat::Direct { .. } => 16,
        }
    }

    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Indexed => 1,
            PixelFormat::Direct { .. } => 2,
        }
    }

    /// Checks that the channel masks don't overlap and fill the pixel.
    ///
    /// A single unused top bit is accepted so that 1:5:5:5 modes validate.
    pub fn validate(self) -> core::result::Result<(), InitError> {
        let PixelFormat::Direct { red, green, blue } = self else {
            return Ok(());
        };

        let mut union = 0u32;
        for channel in [red, green, blue] {
            if channel.size == 0
                || channel.size > 8
                || channel.position as u32 + channel.size as u32 > 16
            {
                return Err(InitError::InvalidChannelMasks);
            }
            if union & channel.mask() != 0 {
                return Err(InitError::InvalidChannelMasks);
            }
            union |= channel.mask();
        }

        match union {
            0xFFFF | 0x7FFF => Ok(()),
            _ => Err(InitError::InvalidChannelMasks),
        }
    }

    /// Color key skipped by transparent blits
    pub const fn transparent(self) -> Color {
        match self {
            PixelFormat::Indexed => Color::Indexed(INDEXED_TRANSPARENT),
            PixelFormat::Direct { .. } => Color::Direct(DIRECT_TRANSPARENT),
        }
    }

    pub fn black(self) -> Color {
        match self {
            PixelFormat::Indexed => Color::Indexed(INDEXED_BLACK),
            PixelFormat::Direct { .. } => Color::Direct(0),
        }
    }

    /// Quantize an RGB triple down to this format
    ///
    /// Indexed modes have no fixed mapping from RGB and return
    /// [`GfxError::Unsupported`].
    pub fn rgb(self, r: u8, g: u8, b: u8) -> Result<Color> {
        match self {
            PixelFormat::Indexed => Err(GfxError::Unsupported),
            PixelFormat::Direct { red, green, blue } => Ok(Color::Direct(
                red.pack(r) | green.pack(g) | blue.pack(b),
            )),
        }
    }

    pub fn convert(self, color: Rgb) -> Result<Color> {
        self.rgb(color.r, color.g, color.b)
    }

    /// Expand a packed color back to 8-bit channels (low bits are zero)
    pub fn to_rgb(self, color: Color) -> Result<Rgb> {
        match (self, color) {
            (PixelFormat::Direct { red, green, blue }, Color::Direct(raw)) => Ok(Rgb::new(
                red.unpack(raw),
                green.unpack(raw),
                blue.unpack(raw),
            )),
            (PixelFormat::Indexed, Color::Indexed(_)) => Err(GfxError::Unsupported),
            _ => Err(GfxError::FormatMismatch),
        }
    }

    /// Raw value of `color`, if it was encoded for this kind of format
    #[inline]
    pub fn check(self, color: Color) -> Result<u16> {
        match (self, color) {
            (PixelFormat::Indexed, Color::Indexed(index)) => Ok(index as u16),
            (PixelFormat::Direct { .. }, Color::Direct(value)) => Ok(value),
            _ => Err(GfxError::FormatMismatch),
        }
    }

    /// Store `raw` into `dst`, which holds exactly one pixel
    #[inline]
    pub(crate) fn store(self, dst: &mut [u8], raw: u16) {
        match self {
            PixelFormat::Indexed => dst[0] = raw as u8,
            PixelFormat::Direct { .. } => dst.copy_from_slice(&raw.to_le_bytes()),
        }
    }

    #[inline]
    pub(crate) fn load(self, src: &[u8]) -> Color {
        match self {
            PixelFormat::Indexed => Color::Indexed(src[0]),
            PixelFormat::Direct { .. } => Color::Direct(u16::from_le_bytes([src[0], src[1]])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_packing() {
        let f = PixelFormat::RGB565;
        assert_eq!(f.rgb(255, 0, 0), Ok(Color::Direct(0xF800)));
        assert_eq!(f.rgb(0, 255, 0), Ok(Color::Direct(0x07E0)));
        assert_eq!(f.rgb(0, 0, 255), Ok(Color::Direct(0x001F)));
        assert_eq!(f.rgb(255, 255, 255), Ok(Color::Direct(0xFFFF)));
        assert_eq!(f.black(), Color::Direct(0));
    }

    #[test]
    fn test_rgb555_packing() {
        let f = PixelFormat::RGB555;
        assert_eq!(f.rgb(255, 255, 255), Ok(Color::Direct(0x7FFF)));
        assert_eq!(f.rgb(0, 255, 0), Ok(Color::Direct(0x03E0)));
    }

    #[test]
    fn test_round_trip_truncates() {
        let f = PixelFormat::RGB565;
        let c = f.rgb(0xAB, 0xCD, 0xEF).unwrap();
        assert_eq!(f.to_rgb(c), Ok(Rgb::new(0xA8, 0xCC, 0xE8)));
    }

    #[test]
    fn test_indexed_has_no_rgb() {
        assert_eq!(PixelFormat::Indexed.rgb(1, 2, 3), Err(GfxError::Unsupported));
        assert_eq!(
            PixelFormat::Indexed.to_rgb(Color::Direct(3)),
            Err(GfxError::FormatMismatch)
        );
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(PixelFormat::Indexed.transparent(), Color::Indexed(0x00));
        assert_eq!(PixelFormat::Indexed.black(), Color::Indexed(0xFF));
        assert_eq!(PixelFormat::RGB565.transparent(), Color::Direct(0x47E0));
    }

    #[test]
    fn test_validate() {
        assert!(PixelFormat::Indexed.validate().is_ok());
        assert!(PixelFormat::RGB565.validate().is_ok());
        assert!(PixelFormat::RGB555.validate().is_ok());

        let overlapping = PixelFormat::Direct {
            red: Channel::new(5, 10),
            green: Channel::new(6, 5),
            blue: Channel::new(5, 0),
        };
        assert_eq!(overlapping.validate(), Err(InitError::InvalidChannelMasks));

        let gap = PixelFormat::Direct {
            red: Channel::new(4, 12),
            green: Channel::new(4, 4),
            blue: Channel::new(4, 0),
        };
        assert_eq!(gap.validate(), Err(InitError::InvalidChannelMasks));
    }

    #[test]
    fn test_store_load_little_endian() {
        let mut px = [0u8; 2];
        PixelFormat::RGB565.store(&mut px, 0x47E0);
        assert_eq!(px, [0xE0, 0x47]);
        assert_eq!(PixelFormat::RGB565.load(&px), Color::Direct(0x47E0));
    }
}
