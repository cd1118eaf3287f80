//! Roundtrips through the `image` crate's PPM and TGA decoders.

use image::{ColorType, DynamicImage, ImageFormat};
use zenwrite::*;

fn decode(bytes: &[u8], format: ImageFormat) -> DynamicImage {
    image::load_from_memory_with_format(bytes, format).unwrap()
}

fn checkerboard(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * bpp;
            if (x + y) % 2 == 0 {
                for c in 0..bpp {
                    pixels[off + c] = 200 + (c as u8 * 20);
                }
            } else {
                for c in 0..bpp {
                    pixels[off + c] = 10 + (c as u8 * 30);
                }
            }
        }
    }
    pixels
}

fn stripes(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    // Long horizontal runs that wrap across row ends.
    (0..w * h * bpp)
        .map(|i| ((i / bpp / 37) % 5) as u8 * 50 + (i % bpp) as u8)
        .collect()
}

#[test]
fn tga_roundtrip_gray8() {
    let (w, h) = (13, 7);
    let pixels = stripes(w, h, 1);
    let mut out = Vec::new();
    encode_tga(&mut out, &pixels, w as u32, h as u32, 1).unwrap();

    let img = decode(&out, ImageFormat::Tga);
    assert_eq!((img.width(), img.height()), (w as u32, h as u32));
    assert_eq!(img.color(), ColorType::L8);
    assert_eq!(img.as_bytes(), &pixels[..]);
}

#[test]
fn tga_roundtrip_rgb8() {
    let (w, h) = (9, 5);
    let pixels = checkerboard(w, h, 3);
    let mut out = Vec::new();
    encode_tga(&mut out, &pixels, w as u32, h as u32, 3).unwrap();

    let img = decode(&out, ImageFormat::Tga);
    assert_eq!(img.color(), ColorType::Rgb8);
    assert_eq!(img.as_bytes(), &pixels[..]);
}

#[test]
fn tga_roundtrip_rgba8() {
    let pixels = vec![
        255, 0, 0, 255, // red
        255, 0, 0, 255, // red again (run)
        0, 255, 0, 128, // green semi-transparent
        0, 0, 255, 0, // blue transparent
        128, 128, 128, 255, // gray
        128, 128, 128, 254, // same color, different alpha
    ];
    let mut out = Vec::new();
    encode_tga(&mut out, &pixels, 3, 2, 4).unwrap();

    let img = decode(&out, ImageFormat::Tga);
    assert_eq!(img.color(), ColorType::Rgba8);
    assert_eq!(img.as_bytes(), &pixels[..]);
}

#[test]
fn tga_roundtrip_long_runs() {
    // Runs longer than one packet and longer than one row.
    let (w, h) = (300, 4);
    let pixels = stripes(w, h, 3);
    let encoded = EncodeRequest::tga()
        .encode(&pixels, w as u32, h as u32, PixelLayout::Rgb8)
        .unwrap();
    assert!(encoded.len() < pixels.len());

    let img = decode(&encoded, ImageFormat::Tga);
    assert_eq!(img.as_bytes(), &pixels[..]);
}

#[test]
fn ppm_roundtrip_rgb8() {
    let (w, h) = (4, 3);
    let pixels = checkerboard(w, h, 3);
    let mut out = Vec::new();
    encode_ppm(&mut out, &pixels, w as u32, h as u32, 3).unwrap();

    let img = decode(&out, ImageFormat::Pnm);
    assert_eq!((img.width(), img.height()), (w as u32, h as u32));
    assert_eq!(img.color(), ColorType::Rgb8);
    assert_eq!(img.as_bytes(), &pixels[..]);
}

#[test]
fn ppm_gray_decodes_as_rgb() {
    let pixels = vec![0u8, 64, 128, 192, 255, 100];
    let mut out = Vec::new();
    encode_ppm(&mut out, &pixels, 3, 2, 1).unwrap();
    assert!(out.starts_with(b"P6\n3 2\n255\n"));

    let img = decode(&out, ImageFormat::Pnm);
    assert_eq!(img.color(), ColorType::Rgb8);
    let expected: Vec<u8> = pixels.iter().flat_map(|&g| [g, g, g]).collect();
    assert_eq!(img.as_bytes(), &expected[..]);
}

#[test]
fn write_file_roundtrip() {
    let dir = std::env::temp_dir().join(format!("zenwrite-roundtrip-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let pixels = checkerboard(6, 6, 3);

    let tga_path = dir.join("board.tga");
    let ppm_path = dir.join("board.ppm");
    write_file(&tga_path, &pixels, 6, 6, 3).unwrap();
    write_file(&ppm_path, &pixels, 6, 6, 3).unwrap();

    for path in [&tga_path, &ppm_path] {
        let img = image::open(path).unwrap();
        assert_eq!(img.as_bytes(), &pixels[..], "{}", path.display());
    }
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn writer_and_vec_outputs_match() {
    let pixels = stripes(31, 17, 4);
    let from_vec = EncodeRequest::tga()
        .encode(&pixels, 31, 17, PixelLayout::Rgba8)
        .unwrap();
    let mut from_writer = Vec::new();
    encode_tga(&mut from_writer, &pixels, 31, 17, 4).unwrap();
    assert_eq!(from_vec, from_writer);
}

#[cfg(feature = "rgb")]
#[test]
fn typed_pixels_roundtrip() {
    let pixels = vec![
        rgb::Rgb { r: 255, g: 0, b: 0 },
        rgb::Rgb { r: 255, g: 0, b: 0 },
        rgb::Rgb { r: 0, g: 0, b: 255 },
        rgb::Rgb {
            r: 10,
            g: 20,
            b: 30,
        },
    ];
    let encoded = EncodeRequest::tga().encode_pixels(&pixels, 2, 2).unwrap();
    let img = decode(&encoded, ImageFormat::Tga);
    assert_eq!(
        img.as_bytes(),
        &[255, 0, 0, 255, 0, 0, 0, 0, 255, 10, 20, 30]
    );
}

#[cfg(feature = "imgref")]
#[test]
fn strided_imgref_is_compacted() {
    // 2x2 gray image stored with a stride of 3 (one padding pixel per row).
    let buf = vec![
        rgb::Gray::new(1u8),
        rgb::Gray::new(2),
        rgb::Gray::new(99),
        rgb::Gray::new(3),
        rgb::Gray::new(4),
        rgb::Gray::new(99),
    ];
    let img = imgref::ImgRef::new_stride(&buf[..], 2, 2, 3);
    let encoded = EncodeRequest::ppm().encode_img(img).unwrap();
    let decoded = decode(&encoded, ImageFormat::Pnm);
    assert_eq!(decoded.as_bytes(), &[1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
}
