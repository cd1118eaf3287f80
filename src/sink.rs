//! Byte destinations the encoders stream into.

use alloc::vec::Vec;

use crate::error::EncodeError;

/// Sequential byte destination.
///
/// Encoders only ever append; header bytes are always put before body bytes.
pub(crate) trait ByteSink {
    fn put(&mut self, bytes: &[u8]) -> Result<(), EncodeError>;

    fn put_u8(&mut self, byte: u8) -> Result<(), EncodeError> {
        self.put(&[byte])
    }

    /// Total bytes accepted so far.
    fn bytes_written(&self) -> usize;
}

impl ByteSink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn put_u8(&mut self, byte: u8) -> Result<(), EncodeError> {
        self.push(byte);
        Ok(())
    }

    fn bytes_written(&self) -> usize {
        self.len()
    }
}

/// Adapter from [`std::io::Write`] to [`ByteSink`].
#[cfg(feature = "std")]
pub(crate) struct IoSink<W> {
    inner: W,
    written: usize,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub(crate) fn flush(&mut self) -> Result<(), EncodeError> {
        self.inner.flush()?;
        Ok(())
    }

    pub(crate) fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    fn bytes_written(&self) -> usize {
        self.written
    }
}
