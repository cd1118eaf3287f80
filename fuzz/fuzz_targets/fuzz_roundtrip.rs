#![no_main]
use libfuzzer_sys::fuzz_target;
use zenwrite::tga::{HEADER_LEN, MAX_PACKET_PIXELS, to_tga_order};
use zenwrite::*;

fuzz_target!(|data: &[u8]| {
    // First byte picks the layout and width, the rest is pixel data.
    let Some((&selector, pixels)) = data.split_first() else {
        return;
    };
    let bpp = [1u8, 3, 4][(selector % 3) as usize];
    let layout = PixelLayout::from_bpp(bpp).unwrap();
    let width = (selector >> 2) as usize + 1;
    let row = width * bpp as usize;
    let height = pixels.len() / row;
    if height == 0 || height > usize::from(u16::MAX) {
        return;
    }
    let pixels = &pixels[..row * height];

    let encoded = EncodeRequest::tga()
        .encode(pixels, width as u32, height as u32, layout)
        .expect("valid framebuffer must encode");

    // Expand the packet stream by hand and compare against the reordered input.
    let pixel_size = bpp as usize;
    let mut expanded = Vec::with_capacity(pixels.len());
    let mut pos = HEADER_LEN;
    while pos < encoded.len() {
        let header = encoded[pos];
        pos += 1;
        let count = (header & 0x7F) as usize + 1;
        assert!(count <= MAX_PACKET_PIXELS);
        if header & 0x80 != 0 {
            assert!(count >= 2, "run packet shorter than 2");
            for _ in 0..count {
                expanded.extend_from_slice(&encoded[pos..pos + pixel_size]);
            }
            pos += pixel_size;
        } else {
            expanded.extend_from_slice(&encoded[pos..pos + count * pixel_size]);
            pos += count * pixel_size;
        }
    }
    assert_eq!(pos, encoded.len());
    assert_eq!(&expanded[..], &*to_tga_order(pixels, layout), "roundtrip pixel mismatch");

    // PPM output size is fixed by the dimensions alone.
    if layout != PixelLayout::Rgba8 {
        let ppm = EncodeRequest::ppm()
            .encode(pixels, width as u32, height as u32, layout)
            .expect("valid framebuffer must encode");
        assert_eq!(Some(ppm.len()), ppm::encoded_len(width as u32, height as u32));
    }
});
