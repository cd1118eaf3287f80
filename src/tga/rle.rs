//! TGA run-length packet encoder.
//!
//! A packet is one header byte followed by pixel data. The top bit of the
//! header selects a run packet (one pixel repeated) or a raw packet (literal
//! pixels); the low seven bits store `count - 1`.
//!
//! Packets are chosen greedily: whenever the pixel at the cursor repeats, a run
//! packet is emitted, even if folding the repeat into a raw packet would have
//! produced fewer bytes. A raw packet ends as soon as the next pixel would
//! repeat the last one it holds. Output must stay byte-identical across
//! versions, so neither rule may be "improved".

/// Maximum pixels covered by one packet.
pub const MAX_PACKET_PIXELS: usize = 128;

const RUN_FLAG: u8 = 0x80;

/// One TGA RLE packet, borrowing its pixel bytes from the source stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Packet<'a> {
    /// `count` copies (2..=128) of `pixel`.
    Run { count: usize, pixel: &'a [u8] },
    /// `count` literal pixels (1..=128), stored back to back in `pixels`.
    Raw { count: usize, pixels: &'a [u8] },
}

impl<'a> Packet<'a> {
    /// Number of pixels this packet expands to.
    pub fn count(&self) -> usize {
        match *self {
            Packet::Run { count, .. } | Packet::Raw { count, .. } => count,
        }
    }

    /// The packet header byte as stored on disk.
    pub fn header_byte(&self) -> u8 {
        match *self {
            Packet::Run { count, .. } => RUN_FLAG | (count - 1) as u8,
            Packet::Raw { count, .. } => (count - 1) as u8,
        }
    }

    /// Pixel bytes stored after the header byte.
    pub fn payload(&self) -> &'a [u8] {
        match *self {
            Packet::Run { pixel, .. } => pixel,
            Packet::Raw { pixels, .. } => pixels,
        }
    }

    /// Bytes this packet occupies on disk (header + payload).
    pub fn encoded_len(&self) -> usize {
        1 + self.payload().len()
    }

    pub fn is_run(&self) -> bool {
        matches!(self, Packet::Run { .. })
    }
}

/// Iterator splitting a pixel stream into TGA RLE packets.
///
/// Packets are yielded in stream order and cover every whole pixel exactly
/// once. Trailing bytes that don't form a whole pixel are ignored.
///
/// ```
/// use zenwrite::tga::{Packet, RlePackets};
///
/// let gray = [5u8, 5, 5, 9, 9, 2];
/// let packets: Vec<_> = RlePackets::new(&gray, 1).collect();
/// assert_eq!(
///     packets,
///     [
///         Packet::Run { count: 3, pixel: &[5][..] },
///         Packet::Run { count: 2, pixel: &[9][..] },
///         Packet::Raw { count: 1, pixels: &[2][..] },
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RlePackets<'a> {
    rest: &'a [u8],
    pixel_size: usize,
}

impl<'a> RlePackets<'a> {
    /// `pixel_size` is the on-disk size of one pixel in bytes; 0 is treated as 1.
    pub fn new(pixels: &'a [u8], pixel_size: usize) -> Self {
        let pixel_size = pixel_size.max(1);
        let whole = pixels.len() - pixels.len() % pixel_size;
        Self {
            rest: &pixels[..whole],
            pixel_size,
        }
    }

    /// Pixels not yet covered by a yielded packet.
    pub fn remaining_pixels(&self) -> usize {
        self.rest.len() / self.pixel_size
    }

    fn pixel(&self, index: usize) -> &'a [u8] {
        let start = index * self.pixel_size;
        &self.rest[start..start + self.pixel_size]
    }

    fn run_length(&self, max: usize) -> usize {
        let first = self.pixel(0);
        let mut len = 1;
        while len < max && self.pixel(len) == first {
            len += 1;
        }
        len
    }

    fn raw_length(&self, max: usize) -> usize {
        let mut len = 1;
        while len < max && self.pixel(len) != self.pixel(len - 1) {
            len += 1;
        }
        len
    }
}

impl<'a> Iterator for RlePackets<'a> {
    type Item = Packet<'a>;

    fn next(&mut self) -> Option<Packet<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        let max = self.remaining_pixels().min(MAX_PACKET_PIXELS);

        let run = self.run_length(max);
        let packet = if run > 1 {
            Packet::Run {
                count: run,
                pixel: self.pixel(0),
            }
        } else {
            let count = self.raw_length(max);
            Packet::Raw {
                count,
                pixels: &self.rest[..count * self.pixel_size],
            }
        };

        self.rest = &self.rest[packet.count() * self.pixel_size..];
        Some(packet)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pixels = self.remaining_pixels();
        (pixels.div_ceil(MAX_PACKET_PIXELS), Some(pixels))
    }
}

impl core::iter::FusedIterator for RlePackets<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn packets(data: &[u8], pixel_size: usize) -> Vec<Packet<'_>> {
        RlePackets::new(data, pixel_size).collect()
    }

    fn expand(packets: &[Packet<'_>]) -> Vec<u8> {
        let mut out = Vec::new();
        for p in packets {
            match *p {
                Packet::Run { count, pixel } => {
                    for _ in 0..count {
                        out.extend_from_slice(pixel);
                    }
                }
                Packet::Raw { pixels, .. } => out.extend_from_slice(pixels),
            }
        }
        out
    }

    #[test]
    fn uniform_gray_is_one_run() {
        let p = packets(&[10, 10, 10, 10], 1);
        assert_eq!(p, [Packet::Run { count: 4, pixel: &[10][..] }]);
        assert_eq!(p[0].header_byte(), 0x83);
        assert_eq!(p[0].payload(), &[10]);
    }

    #[test]
    fn distinct_gray_is_one_raw() {
        let p = packets(&[1, 2, 3, 4], 1);
        assert_eq!(
            p,
            [Packet::Raw {
                count: 4,
                pixels: &[1, 2, 3, 4][..]
            }]
        );
        assert_eq!(p[0].header_byte(), 0x03);
    }

    #[test]
    fn greedy_prefers_runs() {
        let p = packets(&[5, 5, 5, 9, 9, 2], 1);
        let shape: Vec<(bool, usize)> = p.iter().map(|p| (p.is_run(), p.count())).collect();
        assert_eq!(shape, [(true, 3), (true, 2), (false, 1)]);
        assert_eq!(p[2].payload(), &[2]);
    }

    #[test]
    fn raw_stops_before_repeated_pair() {
        // The first 2 stays in the raw packet; only its successor repeats it.
        let p = packets(&[1, 2, 2, 3], 1);
        assert_eq!(
            p,
            [
                Packet::Raw {
                    count: 2,
                    pixels: &[1, 2][..]
                },
                Packet::Raw {
                    count: 2,
                    pixels: &[2, 3][..]
                },
            ]
        );
    }

    #[test]
    fn multi_byte_pixels_compare_whole_pixel() {
        // Third pixel shares its first two bytes with the run but isn't part of it.
        let data = [1, 2, 3, 1, 2, 3, 1, 2, 4];
        let p = packets(&data, 3);
        assert_eq!(
            p,
            [
                Packet::Run {
                    count: 2,
                    pixel: &[1, 2, 3][..]
                },
                Packet::Raw {
                    count: 1,
                    pixels: &[1, 2, 4][..]
                },
            ]
        );
    }

    #[test]
    fn runs_split_at_128() {
        let data = [7u8; 300];
        let p = packets(&data, 1);
        let counts: Vec<usize> = p.iter().map(|p| p.count()).collect();
        assert_eq!(counts, [128, 128, 44]);
        assert!(p.iter().all(|p| p.is_run()));
        assert_eq!(p[0].header_byte(), 0xFF);
    }

    #[test]
    fn raws_split_at_128() {
        let data: Vec<u8> = (0..200u32).map(|i| i as u8).collect();
        let p = packets(&data, 1);
        let counts: Vec<usize> = p.iter().map(|p| p.count()).collect();
        assert_eq!(counts, [128, 72]);
        assert_eq!(p[0].header_byte(), 0x7F);
    }

    #[test]
    fn run_capped_by_remaining_pixels() {
        let p = packets(&[3, 3], 1);
        assert_eq!(p, [Packet::Run { count: 2, pixel: &[3][..] }]);
        let p = packets(&[3], 1);
        assert_eq!(
            p,
            [Packet::Raw {
                count: 1,
                pixels: &[3][..]
            }]
        );
    }

    #[test]
    fn packets_cover_stream_exactly() {
        let mut data = Vec::new();
        let mut state: u32 = 0x1234_5678;
        for i in 0..4096u32 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            // Mix of noise and long flat stretches.
            let v = if (i / 300) % 2 == 0 { (state % 4) as u8 } else { 9 };
            data.extend_from_slice(&[v, v.wrapping_add(1), 0, 255]);
        }
        let p = packets(&data, 4);
        assert_eq!(p.iter().map(|p| p.count()).sum::<usize>(), 4096);
        assert!(p.iter().all(|p| (1..=MAX_PACKET_PIXELS).contains(&p.count())));
        assert!(p.iter().filter(|p| p.is_run()).all(|p| p.count() >= 2));
        assert_eq!(expand(&p), data);
    }

    #[test]
    fn empty_and_partial_input() {
        assert!(packets(&[], 3).is_empty());
        // Two trailing bytes can't form a pixel.
        let p = packets(&[1, 2, 3, 4, 5], 3);
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].count(), 1);
        assert_eq!(RlePackets::new(&[1, 1], 0).count(), 1);
    }

    #[test]
    fn encoded_len_includes_header() {
        let p = packets(&[1, 2, 3, 4, 4, 4], 1);
        let total: usize = p.iter().map(|p| p.encoded_len()).sum();
        // raw(1,2,3,4) = 5 bytes, run(4 x2) = 2 bytes
        assert_eq!(p.len(), 2);
        assert_eq!(total, 7);
    }
}
