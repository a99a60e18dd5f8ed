//! # vgcore
//!
//! Software rendering for linear, packed-pixel framebuffers.
//!
//! ## Layout
//!
//! - `devices`: framebuffer surfaces, pixel formats, colors, cursor sprite
//! - `graphics`: line, rectangle, circle, polygon and pixmap rasterization
//! - `video`: mode records, double buffering and the `Session` API
//! - `serial_log`: optional diagnostics over a 16550 UART
//!
//! The crate is `no_std` and needs `alloc` for the off-screen buffers.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod serial_log;

pub mod devices;
pub mod error;
pub mod graphics;
pub mod video;

pub use devices::framebuffer::{Color, FrameBuffer, PixelFormat, Rgb};
pub use devices::mouse_cursor::Sprite;
pub use error::{GfxError, InitError, Result};
pub use graphics::{Pixmap, Vector2D};
pub use video::{ModeInfo, Session, VideoController, VideoMode, TEXT_MODE};
