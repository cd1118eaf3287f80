//! RGB(A) → BGR(A) channel reordering for TGA's on-disk pixel order.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::pixel::PixelLayout;

/// Reorder a framebuffer into TGA channel order.
///
/// Gray is already in on-disk order and is returned borrowed. RGB and RGBA
/// are copied with red and blue swapped; alpha stays last. Trailing bytes
/// that don't form a whole pixel are copied through unchanged.
pub fn to_tga_order(pixels: &[u8], layout: PixelLayout) -> Cow<'_, [u8]> {
    match layout {
        PixelLayout::Gray8 => Cow::Borrowed(pixels),
        PixelLayout::Rgb8 | PixelLayout::Rgba8 => {
            let mut out: Vec<u8> = pixels.to_vec();
            swap_red_blue_in_place(&mut out, layout);
            Cow::Owned(out)
        }
    }
}

/// Swap the first and third byte of every pixel. No-op for gray.
///
/// The swap is its own inverse, so this also turns BGR(A) back into RGB(A).
pub fn swap_red_blue_in_place(pixels: &mut [u8], layout: PixelLayout) {
    let bpp = layout.bytes_per_pixel();
    if bpp < 3 {
        return;
    }
    for px in pixels.chunks_exact_mut(bpp) {
        px.swap(0, 2);
    }
}
