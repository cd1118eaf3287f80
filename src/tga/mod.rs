//! Run-length encoded TGA (Targa) output.
//!
//! Gray framebuffers become image type 11, RGB and RGBA become image type 10.
//! The origin is always top-left, so rows are written in framebuffer order.
//! No image ID, color map, footer or extension area is written.
//!
//! The building blocks are public so the packet stream can be inspected
//! without going through a full encode:
//!
//! ```
//! use zenwrite::PixelLayout;
//! use zenwrite::tga::{RlePackets, to_tga_order};
//!
//! let rgb = [255u8, 0, 0, 255, 0, 0];
//! let bgr = to_tga_order(&rgb, PixelLayout::Rgb8);
//! let packet = RlePackets::new(&bgr, 3).next().unwrap();
//! assert_eq!(packet.header_byte(), 0x81);
//! assert_eq!(packet.payload(), &[0, 0, 255]);
//! ```

mod encode;
mod header;
mod rle;
mod swizzle;

pub use encode::max_encoded_len;
pub use header::{HEADER_LEN, IMAGE_TYPE_RLE_GRAYSCALE, IMAGE_TYPE_RLE_TRUECOLOR, TgaHeader};
pub use rle::{MAX_PACKET_PIXELS, Packet, RlePackets};
pub use swizzle::{swap_red_blue_in_place, to_tga_order};

pub(crate) use encode::encode_tga;
