//! Device Subsystem
//!
//! Video surfaces and the pointer sprite:
//! - `framebuffer`: surfaces, pixel formats and colors
//! - `mouse_cursor`: cursor sprite and position tracking

pub mod framebuffer;
pub mod mouse_cursor;
