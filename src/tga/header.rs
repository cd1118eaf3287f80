use crate::error::EncodeError;
use crate::pixel::PixelLayout;

/// Size of the TGA file header in bytes.
pub const HEADER_LEN: usize = 18;

/// Image type 10: run-length encoded true-color.
pub const IMAGE_TYPE_RLE_TRUECOLOR: u8 = 10;
/// Image type 11: run-length encoded grayscale.
pub const IMAGE_TYPE_RLE_GRAYSCALE: u8 = 11;

const DESCRIPTOR_TOP_LEFT: u8 = 0x20;
const DESCRIPTOR_ALPHA_8: u8 = 0x08;

/// The fixed 18-byte TGA header.
///
/// No image ID, no color map, origin (0,0). Rows are stored top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TgaHeader {
    pub image_type: u8,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub descriptor: u8,
}

impl TgaHeader {
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Result<Self, EncodeError> {
        let too_large = |_| EncodeError::DimensionsTooLarge { width, height };
        let w = u16::try_from(width).map_err(too_large)?;
        let h = u16::try_from(height).map_err(too_large)?;

        let image_type = match layout {
            PixelLayout::Gray8 => IMAGE_TYPE_RLE_GRAYSCALE,
            PixelLayout::Rgb8 | PixelLayout::Rgba8 => IMAGE_TYPE_RLE_TRUECOLOR,
        };
        let mut descriptor = DESCRIPTOR_TOP_LEFT;
        if layout.has_alpha() {
            descriptor |= DESCRIPTOR_ALPHA_8;
        }

        Ok(Self {
            image_type,
            width: w,
            height: h,
            bits_per_pixel: (layout.bytes_per_pixel() * 8) as u8,
            descriptor,
        })
    }

    /// On-disk size of one pixel in bytes.
    pub fn pixel_size(&self) -> usize {
        usize::from(self.bits_per_pixel / 8)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[2] = self.image_type;
        out[12..14].copy_from_slice(&self.width.to_le_bytes());
        out[14..16].copy_from_slice(&self.height.to_le_bytes());
        out[16] = self.bits_per_pixel;
        out[17] = self.descriptor;
        out
    }
}
