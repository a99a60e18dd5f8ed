//! # Framebuffer Module
//!
//! Pixel storage and color encoding.
//!
//! ## Modules
//!
//! - `framebuffer`: `FrameBuffer` surface with bounds-checked pixel access
//! - `pixel`: `PixelFormat` layouts and the RGB converter
//! - `color`: tagged `Color` values and the `Rgb` triple
//!
//! ## Addressing
//!
//! Pixel `(x, y)` lives at byte `y * stride + x * bytes_per_pixel`. Direct
//! color pixels are stored little-endian, matching VBE linear modes.

pub mod color;
pub mod framebuffer;
pub mod pixel;

pub use color::{Color, Rgb};
pub use framebuffer::FrameBuffer;
pub use pixel::{Channel, PixelFormat};
