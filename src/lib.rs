//! # zenwrite
//!
//! Framebuffer writer for binary PPM and run-length encoded TGA.
//!
//! Takes a flat, row-major pixel buffer (gray, RGB or RGBA, one byte per
//! channel) and writes it out. There is no decoding and no color conversion
//! beyond the RGB→BGR reorder TGA requires.
//!
//! ## Formats
//!
//! - **PPM (P6)**: gray or RGB input. Gray is expanded to RGB triplets, so the
//!   output is always `header + width*height*3` bytes.
//! - **TGA (types 10/11)**: gray, RGB or RGBA input, top-left origin, RLE
//!   compressed with a fixed greedy packet policy (see [`tga`]).
//!
//! ## Usage
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! let rgb = vec![0u8; 320 * 240 * 3];
//! let out = BufWriter::new(File::create("frame.tga")?);
//! zenwrite::encode_tga(out, &rgb, 320, 240, 3)?;
//!
//! // Or replace a file atomically, picking the format from the extension.
//! zenwrite::write_file("frame.ppm", &rgb, 320, 240, 3)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Without the `std` feature, [`EncodeRequest::encode`] still encodes into a
//! `Vec<u8>`.
//!
//! ## Errors
//!
//! Bad arguments (zero dimensions, unsupported bytes per pixel, a framebuffer
//! whose length isn't exactly `width*height*bpp`) are reported before any byte
//! is written. I/O errors are returned as they happen; nothing is retried and
//! nothing is logged at error level.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod encode;
mod error;
#[cfg(feature = "std")]
mod file;
mod format;
mod limits;
mod pixel;
mod sink;
mod validate;

pub mod ppm;
pub mod tga;

// Re-exports
pub use encode::EncodeRequest;
pub use error::EncodeError;
pub use format::OutputFormat;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::EncodePixel;
pub use pixel::PixelLayout;

#[cfg(feature = "std")]
use std::io::Write;
#[cfg(feature = "std")]
use std::path::Path;

/// Write a P6 PPM to `destination`. `bpp` must be 1 (gray) or 3 (RGB).
#[cfg(feature = "std")]
pub fn encode_ppm<W: Write>(
    destination: W,
    framebuffer: &[u8],
    width: u32,
    height: u32,
    bpp: u8,
) -> Result<(), EncodeError> {
    encode_with_bpp(OutputFormat::Ppm, destination, framebuffer, width, height, bpp)
}

/// Write an RLE TGA to `destination`. `bpp` must be 1 (gray), 3 (RGB) or 4 (RGBA).
#[cfg(feature = "std")]
pub fn encode_tga<W: Write>(
    destination: W,
    framebuffer: &[u8],
    width: u32,
    height: u32,
    bpp: u8,
) -> Result<(), EncodeError> {
    encode_with_bpp(OutputFormat::Tga, destination, framebuffer, width, height, bpp)
}

/// Atomically write a P6 PPM file. See [`EncodeRequest::write_file`].
#[cfg(feature = "std")]
pub fn write_ppm_file<P: AsRef<Path>>(
    path: P,
    framebuffer: &[u8],
    width: u32,
    height: u32,
    bpp: u8,
) -> Result<(), EncodeError> {
    write_file_as(OutputFormat::Ppm, path.as_ref(), framebuffer, width, height, bpp)
}

/// Atomically write an RLE TGA file. See [`EncodeRequest::write_file`].
#[cfg(feature = "std")]
pub fn write_tga_file<P: AsRef<Path>>(
    path: P,
    framebuffer: &[u8],
    width: u32,
    height: u32,
    bpp: u8,
) -> Result<(), EncodeError> {
    write_file_as(OutputFormat::Tga, path.as_ref(), framebuffer, width, height, bpp)
}

/// Atomically write a file, choosing PPM or TGA from the path's extension.
#[cfg(feature = "std")]
pub fn write_file<P: AsRef<Path>>(
    path: P,
    framebuffer: &[u8],
    width: u32,
    height: u32,
    bpp: u8,
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(EncodeError::MissingArgument("path"));
    }
    let format = OutputFormat::from_path(path).ok_or(EncodeError::UnrecognizedExtension)?;
    write_file_as(format, path, framebuffer, width, height, bpp)
}

#[cfg(feature = "std")]
fn encode_with_bpp<W: Write>(
    format: OutputFormat,
    destination: W,
    framebuffer: &[u8],
    width: u32,
    height: u32,
    bpp: u8,
) -> Result<(), EncodeError> {
    let layout = validate::layout_for_bpp(bpp, format)?;
    EncodeRequest::new(format).encode_to(destination, framebuffer, width, height, layout)
}

#[cfg(feature = "std")]
fn write_file_as(
    format: OutputFormat,
    path: &Path,
    framebuffer: &[u8],
    width: u32,
    height: u32,
    bpp: u8,
) -> Result<(), EncodeError> {
    if path.as_os_str().is_empty() {
        return Err(EncodeError::MissingArgument("path"));
    }
    let layout = validate::layout_for_bpp(bpp, format)?;
    EncodeRequest::new(format).write_file(path, framebuffer, width, height, layout)
}
