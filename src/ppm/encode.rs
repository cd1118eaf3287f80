//! PPM encoder: binary P6, 8-bit.

use alloc::format;

use crate::error::EncodeError;
use crate::pixel::PixelLayout;
use crate::sink::ByteSink;
use crate::validate::Frame;

/// Gray pixels expanded per `put` call.
const GRAY_CHUNK: usize = 1024;

/// ASCII P6 header. Used for gray input too, which is expanded to RGB.
pub fn ppm_header(width: u32, height: u32) -> alloc::string::String {
    format!("P6\n{width} {height}\n255\n")
}

/// Total encoded size (header + RGB body), or `None` on overflow.
pub fn encoded_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(3)?
        .checked_add(ppm_header(width, height).len())
}

pub(crate) fn encode_ppm<S: ByteSink>(frame: &Frame<'_>, sink: &mut S) -> Result<(), EncodeError> {
    let header = ppm_header(frame.width, frame.height);
    sink.put(header.as_bytes())?;

    match frame.layout {
        PixelLayout::Rgb8 => {
            sink.put(frame.pixels)?;
        }
        PixelLayout::Gray8 => {
            let mut rgb = [0u8; GRAY_CHUNK * 3];
            for chunk in frame.pixels.chunks(GRAY_CHUNK) {
                for (&g, out) in chunk.iter().zip(rgb.chunks_exact_mut(3)) {
                    out.fill(g);
                }
                sink.put(&rgb[..chunk.len() * 3])?;
            }
        }
        // Rejected by validation.
        PixelLayout::Rgba8 => {
            return Err(EncodeError::UnsupportedBpp {
                bpp: 4,
                format: crate::format::OutputFormat::Ppm,
            });
        }
    }

    Ok(())
}
