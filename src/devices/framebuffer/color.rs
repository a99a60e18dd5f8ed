//! Color representation
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

/// A pixel value tagged with the kind of format it was encoded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Palette index for 8 bpp modes
    Indexed(u8),
    /// Packed RGB for 16 bpp modes
    Direct(u16),
}

impl Color {
    /// Raw value as stored in memory
    #[inline]
    pub const fn raw(self) -> u16 {
        match self {
            Color::Indexed(index) => index as u16,
            Color::Direct(value) => value,
        }
    }
}

/// An 8-bit-per-channel RGB triple, before conversion to a pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl From<Rgb888> for Rgb {
    fn from(color: Rgb888) -> Self {
        Rgb::new(color.r(), color.g(), color.b())
    }
}

impl From<Rgb> for Rgb888 {
    fn from(color: Rgb) -> Self {
        Rgb888::new(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = Rgb::from_hex(0x2196F3);
        assert_eq!(c, Rgb::new(0x21, 0x96, 0xF3));
        assert_eq!(c.to_hex(), 0x2196F3);
    }

    #[test]
    fn test_raw_value() {
        assert_eq!(Color::Indexed(0xAB).raw(), 0xAB);
        assert_eq!(Color::Direct(0x47E0).raw(), 0x47E0);
    }
}
