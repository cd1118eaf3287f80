use alloc::vec::Vec;

use crate::error::EncodeError;
use crate::format::OutputFormat;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::sink::ByteSink;
use crate::validate::{Frame, validate};
use crate::{ppm, tga};

/// Encode request builder.
///
/// Selects the output format and optional [`Limits`], then encodes a
/// framebuffer to a `Vec`, an [`std::io::Write`] sink, or a file.
///
/// ```
/// use zenwrite::{EncodeRequest, PixelLayout};
///
/// let gray = [10u8, 10, 10, 10];
/// let tga = EncodeRequest::tga().encode(&gray, 4, 1, PixelLayout::Gray8)?;
/// assert_eq!(&tga[18..], &[0x83, 10]);
/// # Ok::<(), zenwrite::EncodeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    format: OutputFormat,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            limits: None,
        }
    }

    /// Binary PPM (P6).
    pub fn ppm() -> Self {
        Self::new(OutputFormat::Ppm)
    }

    /// Run-length encoded TGA.
    pub fn tga() -> Self {
        Self::new(OutputFormat::Tga)
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Encode into a new buffer.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Vec<u8>, EncodeError> {
        let frame = self.check_frame(pixels, width, height, layout)?;
        let capacity = self.max_output_len(&frame)?;
        if let Some(limits) = self.limits {
            limits.check_memory(capacity)?;
        }
        let mut out = Vec::with_capacity(capacity);
        self.run(&frame, &mut out)?;
        Ok(out)
    }

    /// Encode straight into `writer`.
    ///
    /// Nothing is written if validation fails. The writer is flushed on
    /// success; on an I/O error whatever was already written stays in the
    /// writer.
    #[cfg(feature = "std")]
    pub fn encode_to<W: std::io::Write>(
        &self,
        writer: W,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<(), EncodeError> {
        let frame = self.check_frame(pixels, width, height, layout)?;
        let mut sink = crate::sink::IoSink::new(writer);
        self.run(&frame, &mut sink)?;
        sink.flush()
    }

    /// Encode to a file at `path`, replacing it atomically.
    ///
    /// The image is written to a temporary file next to `path` and renamed
    /// over it once complete, so `path` never holds a truncated image. No
    /// file is created if validation fails.
    #[cfg(feature = "std")]
    pub fn write_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<(), EncodeError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(EncodeError::MissingArgument("path"));
        }
        let frame = self.check_frame(pixels, width, height, layout)?;
        crate::file::write_atomic(path, |sink| self.run(&frame, sink))
    }

    /// Encode typed pixels (`Gray<u8>`, `Rgb<u8>`, `Rgba<u8>`).
    #[cfg(feature = "rgb")]
    pub fn encode_pixels<P: crate::EncodePixel>(
        &self,
        pixels: &[P],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, EncodeError>
    where
        [P]: rgb::ComponentBytes<u8>,
    {
        use rgb::ComponentBytes;
        self.encode(pixels.as_bytes(), width, height, P::layout())
    }

    /// Encode an [`imgref::ImgRef`]. Padded (strided) images are compacted first.
    #[cfg(feature = "imgref")]
    pub fn encode_img<P: crate::EncodePixel>(
        &self,
        img: imgref::ImgRef<'_, P>,
    ) -> Result<Vec<u8>, EncodeError>
    where
        [P]: rgb::ComponentBytes<u8>,
    {
        let (w, h) = (img.width(), img.height());
        let (Ok(width), Ok(height)) = (u32::try_from(w), u32::try_from(h)) else {
            return Err(EncodeError::DimensionsTooLarge {
                width: u32::try_from(w).unwrap_or(u32::MAX),
                height: u32::try_from(h).unwrap_or(u32::MAX),
            });
        };

        if img.stride() == w {
            if let Some(buf) = img.buf().get(..w * h) {
                return self.encode_pixels(buf, width, height);
            }
        }
        let compact: Vec<P> = img.rows().flatten().copied().collect();
        self.encode_pixels(&compact, width, height)
    }

    fn check_frame<'p>(
        &self,
        pixels: &'p [u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Frame<'p>, EncodeError> {
        validate(pixels, width, height, layout, self.format, self.limits)
    }

    fn max_output_len(&self, frame: &Frame<'_>) -> Result<usize, EncodeError> {
        let len = match self.format {
            OutputFormat::Ppm => ppm::encoded_len(frame.width, frame.height),
            OutputFormat::Tga => {
                tga::max_encoded_len(frame.pixel_count, frame.layout.bytes_per_pixel())
            }
        };
        len.ok_or(EncodeError::DimensionsTooLarge {
            width: frame.width,
            height: frame.height,
        })
    }

    fn run<S: ByteSink>(&self, frame: &Frame<'_>, sink: &mut S) -> Result<(), EncodeError> {
        let start = sink.bytes_written();
        match self.format {
            OutputFormat::Ppm => ppm::encode_ppm(frame, sink)?,
            OutputFormat::Tga => tga::encode_tga(frame, sink)?,
        }
        log::debug!(
            "encoded {}x{} {:?} as {:?}: {} bytes",
            frame.width,
            frame.height,
            frame.layout,
            self.format,
            sink.bytes_written() - start
        );
        Ok(())
    }
}
