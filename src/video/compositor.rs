//! # Compositor
//!
//! Double buffering with a cursor overlay.
//!
//! ```text
//!   draw ops          draw_mouse_cursor
//!  ─────────► back ──────────────────► overlay (back + sprite)
//!              │                          │
//!  swap_buffer │                          │ swap_mouse_buffer
//!              ▼                          ▼
//!           physical ◄────────────────────┘
//! ```
//!
//! `physical` only ever receives whole frames, so a half-drawn scene is
//! never visible. The cursor lives only in `overlay`; `back` keeps the bare
//! scene and the next composite starts from it again.

use crate::devices::framebuffer::{Color, FrameBuffer};
use crate::error::{GfxError, InitError, Result};
use crate::graphics::Pixmap;

/// Where the current frame is in the draw/composite/present cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Idle,
    Drawing,
    Composited,
    Presented,
}

/// Owns the off-screen surfaces and presents them to video memory
#[derive(Debug)]
pub struct Compositor<'a> {
    physical: FrameBuffer<&'a mut [u8]>,
    back: FrameBuffer,
    overlay: FrameBuffer,
    state: FrameState,
}

impl<'a> Compositor<'a> {
    /// Allocate `back` and `overlay` with the geometry of `physical`
    pub fn new(physical: FrameBuffer<&'a mut [u8]>) -> core::result::Result<Self, InitError> {
        let (width, height, stride, format) = (
            physical.width(),
            physical.height(),
            physical.stride(),
            physical.format(),
        );
        let back = FrameBuffer::with_stride(width, height, stride, format)?;
        let overlay = FrameBuffer::with_stride(width, height, stride, format)?;

        Ok(Self {
            physical,
            back,
            overlay,
            state: FrameState::Idle,
        })
    }

    #[inline]
    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn physical(&self) -> &FrameBuffer<&'a mut [u8]> {
        &self.physical
    }

    pub fn back(&self) -> &FrameBuffer {
        &self.back
    }

    /// Mutable access to the scene. Counts as drawing.
    pub fn back_mut(&mut self) -> &mut FrameBuffer {
        self.state = FrameState::Drawing;
        &mut self.back
    }

    pub fn overlay(&self) -> &FrameBuffer {
        &self.overlay
    }

    /// Run a drawing operation against `back`; the frame only counts as
    /// dirty when the operation succeeds.
    pub fn draw<T>(&mut self, op: impl FnOnce(&mut FrameBuffer) -> Result<T>) -> Result<T> {
        let out = op(&mut self.back)?;
        self.state = FrameState::Drawing;
        Ok(out)
    }

    /// Copy the whole scene into `overlay` and blit `sprite` over it at
    /// `(x, y)`. `back` is left as it was.
    pub fn draw_mouse_cursor(&mut self, x: i64, y: i64, sprite: &Pixmap<'_>) -> Result<()> {
        if sprite.format() != self.back.format() {
            return Err(GfxError::FormatMismatch);
        }
        Self::blit_frame(&mut self.overlay, &self.back);
        self.overlay.draw_pixmap(x, y, sprite)?;
        self.state = FrameState::Composited;
        Ok(())
    }

    /// Write a single pixel into `overlay`
    pub fn set_mouse_pixel(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        self.overlay.set_pixel(x, y, color)
    }

    /// Present the bare scene
    pub fn swap_buffer(&mut self) {
        Self::blit_frame(&mut self.physical, &self.back);
        self.state = FrameState::Presented;
    }

    /// Present scene + cursor
    pub fn swap_mouse_buffer(&mut self) {
        Self::blit_frame(&mut self.physical, &self.overlay);
        self.state = FrameState::Presented;
    }

    /// Full-surface copy between surfaces created with the same geometry.
    /// A mismatch is a construction bug and panics.
    fn blit_frame<D, S>(dst: &mut FrameBuffer<D>, src: &FrameBuffer<S>)
    where
        D: AsRef<[u8]> + AsMut<[u8]>,
        S: AsRef<[u8]> + AsMut<[u8]>,
    {
        debug_assert!(dst.same_geometry(src));
        dst.as_bytes_mut().copy_from_slice(src.as_bytes());
    }
}
