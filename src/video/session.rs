//! # Rendering Session
//!
//! Entry point for applications. A [`Session`] is created once the display
//! is in graphics mode and lives until [`Session::exit`] switches it back.
//!
//! All drawing goes to the back buffer; nothing reaches the screen until
//! [`Session::swap_buffer`] or [`Session::swap_mouse_buffer`].
//!
//! ## Frame loop
//!
//! ```ignore
//! let mut session = Session::start(&mut vbe, 0x117)?;
//! let cursor = Sprite::arrow(session.format())?;
//! loop {
//!     session.fill(session.rgb(0, 0, 64)?)?;
//!     session.draw_circle(400, 300, 50, session.rgb(255, 255, 0)?)?;
//!     session.swap_buffer();
//!     session.draw_mouse_cursor(mx, my, &cursor.as_pixmap())?;
//!     session.swap_mouse_buffer();
//! }
//! session.exit(&mut vbe, TEXT_MODE)?;
//! ```

use super::compositor::{Compositor, FrameState};
use super::mode::{ModeInfo, VideoController};
use crate::devices::framebuffer::{Color, FrameBuffer, PixelFormat};
use crate::error::{GfxError, InitError, Result};
use crate::gfx_log;
use crate::graphics::{Pixmap, Vector2D};

#[derive(Debug)]
pub struct Session<'a> {
    info: ModeInfo,
    compositor: Compositor<'a>,
}

impl<'a> Session<'a> {
    /// Bind `vram` as the visible surface and allocate the off-screen
    /// buffers. `vram` may be longer than the mode needs.
    pub fn init(info: ModeInfo, vram: &'a mut [u8]) -> Result<Self> {
        match Self::try_init(info, vram) {
            Ok(session) => {
                gfx_log!(
                    "session up: {}x{} @ {} bpp, {} bytes/line",
                    info.width,
                    info.height,
                    info.bits_per_pixel,
                    info.bytes_per_scan_line
                );
                Ok(session)
            }
            Err(err) => {
                gfx_log!("session init failed: {}", err);
                Err(err.into())
            }
        }
    }

    fn try_init(info: ModeInfo, vram: &'a mut [u8]) -> core::result::Result<Self, InitError> {
        let format = info.pixel_format()?;
        let needed = info.vram_len()?;
        if vram.len() < needed {
            return Err(InitError::VramTooSmall {
                needed,
                got: vram.len(),
            });
        }

        let physical = FrameBuffer::from_storage(
            &mut vram[..needed],
            info.width,
            info.height,
            info.bytes_per_scan_line,
            format,
        )?;
        let compositor = Compositor::new(physical)?;
        Ok(Self { info, compositor })
    }

    /// Ask `controller` for `mode`, then [`init`](Self::init) on what it
    /// returns
    pub fn start<C: VideoController<'a>>(controller: &mut C, mode: u16) -> Result<Self> {
        gfx_log!("switching to mode {:#x}", mode);
        let video = controller.set_mode(mode).map_err(|err| match err {
            GfxError::Mode(msg) => GfxError::Init(InitError::Controller(msg)),
            other => other,
        })?;
        Self::init(video.info, video.vram)
    }

    /// Drop the off-screen buffers and have `controller` switch to
    /// `default_mode`
    pub fn exit<'c, C: VideoController<'c>>(self, controller: &mut C, default_mode: u16) -> Result<()> {
        drop(self);
        match controller.restore_mode(default_mode) {
            Ok(()) => {
                gfx_log!("session closed, back to mode {:#x}", default_mode);
                Ok(())
            }
            Err(err) => {
                gfx_log!("restoring mode {:#x} failed: {}", default_mode, err);
                Err(err)
            }
        }
    }

    pub fn mode_info(&self) -> &ModeInfo {
        &self.info
    }

    pub fn format(&self) -> PixelFormat {
        self.compositor.back().format()
    }

    /// Convert an RGB triple to the session's pixel format
    pub fn rgb(&self, r: u8, g: u8, b: u8) -> Result<Color> {
        self.format().rgb(r, g, b)
    }

    pub fn state(&self) -> FrameState {
        self.compositor.state()
    }

    pub fn compositor(&self) -> &Compositor<'a> {
        &self.compositor
    }

    /// Handle to the back buffer
    pub fn back_buffer(&self) -> &FrameBuffer {
        self.compositor.back()
    }

    pub fn back_buffer_mut(&mut self) -> &mut FrameBuffer {
        self.compositor.back_mut()
    }

    // =========================================================================
    // DRAWING (back buffer)
    // =========================================================================

    pub fn fill(&mut self, color: Color) -> Result<()> {
        self.compositor.draw(|fb| fb.fill(color))
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        self.compositor.draw(|fb| fb.set_pixel(x, y, color))
    }

    pub fn get_pixel(&self, x: i64, y: i64) -> Result<Color> {
        self.compositor.back().get_pixel(x, y)
    }

    pub fn draw_line(&mut self, xi: i64, yi: i64, xf: i64, yf: i64, color: Color) -> Result<()> {
        self.compositor.draw(|fb| fb.draw_line(xi, yi, xf, yf, color))
    }

    pub fn draw_rectangle(&mut self, x: i64, y: i64, width: u32, height: u32, color: Color) -> Result<()> {
        self.compositor
            .draw(|fb| fb.draw_rectangle(x, y, width, height, color))
    }

    pub fn draw_circle(&mut self, x: i64, y: i64, radius: u32, color: Color) -> Result<()> {
        self.compositor.draw(|fb| fb.draw_circle(x, y, radius, color))
    }

    pub fn draw_pixmap(&mut self, x: i64, y: i64, pixmap: &Pixmap<'_>) -> Result<()> {
        self.compositor.draw(|fb| fb.draw_pixmap(x, y, pixmap))
    }

    pub fn draw_polygon(&mut self, vertices: &[Vector2D], color: Color) -> Result<()> {
        self.compositor.draw(|fb| fb.draw_polygon(vertices, color))
    }

    // =========================================================================
    // CURSOR AND PRESENTATION
    // =========================================================================

    pub fn draw_mouse_cursor(&mut self, x: i64, y: i64, sprite: &Pixmap<'_>) -> Result<()> {
        self.compositor.draw_mouse_cursor(x, y, sprite)
    }

    pub fn set_mouse_pixel(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        self.compositor.set_mouse_pixel(x, y, color)
    }

    pub fn swap_buffer(&mut self) {
        self.compositor.swap_buffer();
    }

    pub fn swap_mouse_buffer(&mut self) {
        self.compositor.swap_mouse_buffer();
    }
}
