//! # Video Modes
//!
//! The mode record handed over by whoever switched the display into
//! graphics mode, plus the trait that collaborator implements.
//!
//! Modes come from three places:
//! - the VBE mode table below, for the usual linear modes
//! - a bootloader `FrameBufferInfo`
//! - a record filled in by hand from a VBE mode info block

use crate::devices::framebuffer::{Channel, PixelFormat};
use crate::error::{InitError, Result};
use bootloader_api::info::{FrameBufferInfo, PixelFormat as BootPixelFormat};
use x86_64::{PhysAddr, VirtAddr};

/// Text mode 0x03 (80x25, 16 colors), the usual mode to go back to
pub const TEXT_MODE: u16 = 0x03;

/// Bit in a VBE mode number requesting the linear framebuffer
pub const VBE_LINEAR_FRAMEBUFFER: u16 = 1 << 14;

/// Resolution and pixel layout of the active video mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInfo {
    /// VBE mode number, when the mode came from VBE
    pub mode: Option<u16>,
    pub width: usize,
    pub height: usize,
    pub bits_per_pixel: u8,
    pub bytes_per_scan_line: usize,
    /// Channel layout; all zero in indexed modes
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
    /// Physical address of the linear framebuffer
    pub phys_base: PhysAddr,
}

impl ModeInfo {
    /// Mode with the tightest scan line for `format`
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        let (red, green, blue) = match format {
            PixelFormat::Indexed => (Channel::new(0, 0), Channel::new(0, 0), Channel::new(0, 0)),
            PixelFormat::Direct { red, green, blue } => (red, green, blue),
        };
        Self {
            mode: None,
            width,
            height,
            bits_per_pixel: format.bits_per_pixel(),
            // saturates; init rejects the result as BadGeometry
            bytes_per_scan_line: width.saturating_mul(format.bytes_per_pixel()),
            red,
            green,
            blue,
            phys_base: PhysAddr::zero(),
        }
    }

    /// One of the common VBE 2.0 linear modes
    pub fn vbe(mode: u16) -> Option<Self> {
        let (width, height, format) = match mode & !VBE_LINEAR_FRAMEBUFFER {
            0x101 => (640, 480, PixelFormat::Indexed),
            0x103 => (800, 600, PixelFormat::Indexed),
            0x105 => (1024, 768, PixelFormat::Indexed),
            0x107 => (1280, 1024, PixelFormat::Indexed),
            0x111 => (640, 480, PixelFormat::RGB565),
            0x114 => (800, 600, PixelFormat::RGB565),
            0x117 => (1024, 768, PixelFormat::RGB565),
            0x11A => (1280, 1024, PixelFormat::RGB565),
            _ => return None,
        };
        Some(Self {
            mode: Some(mode & !VBE_LINEAR_FRAMEBUFFER),
            ..Self::new(width, height, format)
        })
    }

    pub fn with_phys_base(self, phys_base: PhysAddr) -> Self {
        Self { phys_base, ..self }
    }

    pub fn with_scan_line(self, bytes_per_scan_line: usize) -> Self {
        Self {
            bytes_per_scan_line,
            ..self
        }
    }

    /// Pixel format described by this mode, validated
    pub fn pixel_format(&self) -> core::result::Result<PixelFormat, InitError> {
        let format = match self.bits_per_pixel {
            8 => PixelFormat::Indexed,
            16 => PixelFormat::Direct {
                red: self.red,
                green: self.green,
                blue: self.blue,
            },
            other => return Err(InitError::UnsupportedDepth(other)),
        };
        format.validate()?;
        Ok(format)
    }

    /// Bytes of video memory the mode addresses
    pub fn vram_len(&self) -> core::result::Result<usize, InitError> {
        self.bytes_per_scan_line
            .checked_mul(self.height)
            .ok_or(InitError::BadGeometry)
    }
}

impl TryFrom<FrameBufferInfo> for ModeInfo {
    type Error = InitError;

    fn try_from(info: FrameBufferInfo) -> core::result::Result<Self, Self::Error> {
        let format = match (info.bytes_per_pixel, info.pixel_format) {
            (1, _) => PixelFormat::Indexed,
            (
                2,
                BootPixelFormat::Unknown {
                    red_position,
                    green_position,
                    blue_position,
                    ..
                },
            ) => direct_from_positions(red_position, green_position, blue_position)?,
            (2, _) => return Err(InitError::InvalidChannelMasks),
            (bpp, _) => return Err(InitError::UnsupportedDepth((bpp * 8).min(u8::MAX as usize) as u8)),
        };
        format.validate()?;

        Ok(ModeInfo {
            // bootloader stride is in pixels
            bytes_per_scan_line: info
                .stride
                .checked_mul(info.bytes_per_pixel)
                .ok_or(InitError::BadGeometry)?,
            ..ModeInfo::new(info.width, info.height, format)
        })
    }
}

/// Channel sizes run from each channel's position up to the next one. A
/// spare top bit belongs to no channel, so the top channel is never wider
/// than the widest one below it (1:5:5:5 stays 5:5:5).
fn direct_from_positions(red: u8, green: u8, blue: u8) -> core::result::Result<PixelFormat, InitError> {
    if red.max(green).max(blue) >= 16 {
        return Err(InitError::InvalidChannelMasks);
    }
    let mut positions = [red, green, blue];
    positions.sort_unstable();
    let gap = |pos: u8| positions.iter().copied().find(|&p| p > pos).unwrap_or(16) - pos;
    let widest_below_top = gap(positions[0]).max(gap(positions[1]));
    let size_at = |pos: u8| -> Channel {
        let size = if pos == positions[2] {
            gap(pos).min(widest_below_top)
        } else {
            gap(pos)
        };
        Channel::new(size, pos)
    };

    Ok(PixelFormat::Direct {
        red: size_at(red),
        green: size_at(green),
        blue: size_at(blue),
    })
}

/// A mode switch result: the mode record and the mapped video memory
#[derive(Debug)]
pub struct VideoMode<'a> {
    pub info: ModeInfo,
    pub vram: &'a mut [u8],
}

/// The collaborator that talks to the video BIOS (or firmware) and maps
/// video memory. Implemented outside this crate.
pub trait VideoController<'a> {
    /// Switch to `mode` and return its description and mapped memory
    fn set_mode(&mut self, mode: u16) -> Result<VideoMode<'a>>;

    /// Switch back to `mode`, usually [`TEXT_MODE`]
    fn restore_mode(&mut self, mode: u16) -> Result<()>;
}

/// View mapped video memory as a byte slice
///
/// # Safety
/// `base` must point to `len` bytes of mapped, writable memory that stays
/// valid and unaliased for `'a`.
pub unsafe fn vram_from_virt<'a>(base: VirtAddr, len: usize) -> &'a mut [u8] {
    core::slice::from_raw_parts_mut(base.as_mut_ptr::<u8>(), len)
}
