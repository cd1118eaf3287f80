//! TGA encoder: RLE grayscale (type 11) and RLE true-color (type 10).

use super::header::{HEADER_LEN, TgaHeader};
use super::rle::{MAX_PACKET_PIXELS, RlePackets};
use super::swizzle::to_tga_order;
use crate::error::EncodeError;
use crate::sink::ByteSink;
use crate::validate::Frame;

/// Stream header and RLE body for a validated frame into `sink`.
///
/// The header and the reordered pixel buffer are built before the first
/// byte is put, so an error from either leaves the sink untouched.
pub(crate) fn encode_tga<S: ByteSink>(frame: &Frame<'_>, sink: &mut S) -> Result<(), EncodeError> {
    let header = TgaHeader::new(frame.width, frame.height, frame.layout)?;
    let pixels = to_tga_order(frame.pixels, frame.layout);

    sink.put(&header.to_bytes())?;

    let mut packets = 0usize;
    let mut runs = 0usize;
    for packet in RlePackets::new(&pixels, header.pixel_size()) {
        sink.put_u8(packet.header_byte())?;
        sink.put(packet.payload())?;
        packets += 1;
        if packet.is_run() {
            runs += 1;
        }
    }

    log::trace!(
        "tga body: {} pixels in {packets} packets ({runs} run, {} raw)",
        frame.pixel_count,
        packets - runs
    );
    Ok(())
}

/// Upper bound on the encoded size of a TGA image, header included.
///
/// Reached when every packet is raw: each 128-pixel chunk costs one extra
/// header byte.
pub fn max_encoded_len(pixel_count: usize, pixel_size: usize) -> Option<usize> {
    pixel_count
        .checked_mul(pixel_size)?
        .checked_add(pixel_count.div_ceil(MAX_PACKET_PIXELS))?
        .checked_add(HEADER_LEN)
}
