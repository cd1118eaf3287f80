use crate::pixel::PixelLayout;

/// Output file format.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Binary PPM (P6). Always stored as 8-bit RGB.
    Ppm,
    /// Run-length encoded TGA (image types 10 and 11).
    Tga,
}

impl OutputFormat {
    /// Whether this format can encode framebuffers in `layout`.
    ///
    /// PPM takes gray and RGB (gray is expanded to RGB triplets).
    /// TGA takes gray, RGB and RGBA.
    pub fn accepts(self, layout: PixelLayout) -> bool {
        match self {
            OutputFormat::Ppm => matches!(layout, PixelLayout::Gray8 | PixelLayout::Rgb8),
            OutputFormat::Tga => matches!(
                layout,
                PixelLayout::Gray8 | PixelLayout::Rgb8 | PixelLayout::Rgba8
            ),
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ppm => "ppm",
            OutputFormat::Tga => "tga",
        }
    }

    /// Look up a format by file extension (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("ppm") || ext.eq_ignore_ascii_case("pnm") {
            Some(OutputFormat::Ppm)
        } else if ext.eq_ignore_ascii_case("tga") || ext.eq_ignore_ascii_case("targa") {
            Some(OutputFormat::Tga)
        } else {
            None
        }
    }

    #[cfg(feature = "std")]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}
