//! # Error Types
//!
//! Every fallible operation in the crate returns [`GfxError`]. Drawing
//! primitives clip silently and only fail on malformed input, so the
//! `OutOfBounds` variant is only ever seen from single-pixel access.

use core::fmt;

/// Result type used across the crate
pub type Result<T> = core::result::Result<T, GfxError>;

/// Graphics errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GfxError {
    /// Coordinate outside the target surface
    OutOfBounds,
    /// Polygon with fewer than three vertices
    InvalidPolygon,
    /// Session could not be started
    Init(InitError),
    /// Buffers taking part in a copy have different geometry
    SizeMismatch,
    /// Color or pixmap encoded for another pixel format
    FormatMismatch,
    /// Operation not available in the active pixel format
    Unsupported,
    /// The mode collaborator reported a failure
    Mode(&'static str),
}

/// Reasons a session fails to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    UnsupportedDepth(u8),
    InvalidChannelMasks,
    BadGeometry,
    VramTooSmall { needed: usize, got: usize },
    OutOfMemory,
    Controller(&'static str),
}

impl From<InitError> for GfxError {
    fn from(err: InitError) -> Self {
        GfxError::Init(err)
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::UnsupportedDepth(bpp) => write!(f, "unsupported depth: {} bpp", bpp),
            InitError::InvalidChannelMasks => write!(f, "channel masks overlap or leave gaps"),
            InitError::BadGeometry => write!(f, "stride smaller than a row of pixels"),
            InitError::VramTooSmall { needed, got } => {
                write!(f, "video memory too small: need {} bytes, got {}", needed, got)
            }
            InitError::OutOfMemory => write!(f, "out of memory for off-screen buffers"),
            InitError::Controller(msg) => write!(f, "mode controller: {}", msg),
        }
    }
}

impl fmt::Display for GfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GfxError::OutOfBounds => write!(f, "coordinate out of bounds"),
            GfxError::InvalidPolygon => write!(f, "polygon needs at least 3 vertices"),
            GfxError::Init(err) => write!(f, "init failed: {}", err),
            GfxError::SizeMismatch => write!(f, "buffer geometry mismatch"),
            GfxError::FormatMismatch => write!(f, "value encoded for another pixel format"),
            GfxError::Unsupported => write!(f, "not supported in this pixel format"),
            GfxError::Mode(msg) => write!(f, "mode change failed: {}", msg),
        }
    }
}
