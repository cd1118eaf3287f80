//! Framebuffer validation shared by both encoders.
//!
//! Everything here runs before the first byte reaches a destination, so a
//! rejected framebuffer never produces partial output.

use crate::error::EncodeError;
use crate::format::OutputFormat;
use crate::limits::Limits;
use crate::pixel::PixelLayout;

/// A framebuffer that passed validation for a specific output format.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub pixel_count: usize,
}

/// Resolve a raw bytes-per-pixel count against what `format` accepts.
pub(crate) fn layout_for_bpp(bpp: u8, format: OutputFormat) -> Result<PixelLayout, EncodeError> {
    PixelLayout::from_bpp(bpp)
        .filter(|layout| format.accepts(*layout))
        .ok_or(EncodeError::UnsupportedBpp { bpp, format })
}

pub(crate) fn validate<'a>(
    pixels: &'a [u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    format: OutputFormat,
    limits: Option<&Limits>,
) -> Result<Frame<'a>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    if !format.accepts(layout) {
        return Err(EncodeError::UnsupportedBpp {
            bpp: layout.bpp(),
            format,
        });
    }

    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
    let expected = pixel_count
        .checked_mul(layout.bytes_per_pixel())
        .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
    if pixels.len() != expected {
        return Err(EncodeError::SizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    // TGA stores both dimensions as u16.
    if format == OutputFormat::Tga && (width > u32::from(u16::MAX) || height > u32::from(u16::MAX))
    {
        return Err(EncodeError::DimensionsTooLarge { width, height });
    }

    if let Some(limits) = limits {
        limits.check_dimensions(width, height)?;
        // Reordering to BGR needs a scratch copy of the framebuffer.
        if format == OutputFormat::Tga && layout != PixelLayout::Gray8 {
            limits.check_memory(expected)?;
        }
    }

    Ok(Frame {
        pixels,
        width,
        height,
        layout,
        pixel_count,
    })
}
