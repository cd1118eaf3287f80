use alloc::string::String;

use crate::format::OutputFormat;

/// Errors from PPM/TGA encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("{format:?} does not support {bpp} bytes per pixel")]
    UnsupportedBpp { bpp: u8, format: OutputFormat },

    #[error("framebuffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("cannot infer output format from file extension")]
    UnrecognizedExtension,

    #[cfg(feature = "std")]
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodeError {
    /// Whether this error was raised before any byte reached the destination.
    pub fn is_validation(&self) -> bool {
        match self {
            #[cfg(feature = "std")]
            EncodeError::Io(_) => false,
            _ => true,
        }
    }
}
