//! # Video Session Module
//!
//! Ties the surfaces and the rasterizer together into a rendering session.
//!
//! ## Submodules
//!
//! - `mode`: mode records and the `VideoController` collaborator trait
//! - `compositor`: back buffer, cursor overlay and presentation
//! - `session`: the `Session` API applications draw through
//!
//! ## Lifecycle
//!
//! 1. The controller switches into a graphics mode and maps video memory
//! 2. `Session::init` validates the mode and allocates the off-screen buffers
//! 3. Frames are drawn, composited and swapped for as long as needed
//! 4. `Session::exit` frees the buffers and restores the default mode

pub mod compositor;
pub mod mode;
pub mod session;

pub use compositor::{Compositor, FrameState};
pub use mode::{ModeInfo, VideoController, VideoMode, TEXT_MODE};
pub use session::Session;
