//! Binary PPM (P6) output.
//!
//! Only P6 is written. Gray framebuffers are expanded to RGB triplets rather
//! than written as P5, so every file this module produces is
//! `header + width*height*3` bytes.

mod encode;

pub use encode::{encoded_len, ppm_header};

pub(crate) use encode::encode_ppm;
