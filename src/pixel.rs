/// Pixel memory layout of a source framebuffer.
///
/// Channel order is always R,G,B[,A] in memory; the TGA encoder reorders to
/// its on-disk B,G,R[,A] itself.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Map a bytes-per-pixel count (1, 3 or 4) to a layout.
    pub fn from_bpp(bpp: u8) -> Option<Self> {
        match bpp {
            1 => Some(Self::Gray8),
            3 => Some(Self::Rgb8),
            4 => Some(Self::Rgba8),
            _ => None,
        }
    }

    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }

    /// Number of channels. Every channel is one byte.
    pub fn channels(&self) -> usize {
        self.bytes_per_pixel()
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba8)
    }

    pub(crate) fn bpp(&self) -> u8 {
        self.bytes_per_pixel() as u8
    }
}

/// Typed pixels that can be encoded without going through raw bytes.
#[cfg(feature = "rgb")]
pub trait EncodePixel: Copy + 'static {
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl EncodePixel for rgb::Gray<u8> {
    fn layout() -> PixelLayout {
        PixelLayout::Gray8
    }
}

#[cfg(feature = "rgb")]
impl EncodePixel for rgb::Rgb<u8> {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl EncodePixel for rgb::Rgba<u8> {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}
