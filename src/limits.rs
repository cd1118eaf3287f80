use crate::error::EncodeError;

/// Resource limits for encode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for intermediate and output buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check width, height and pixel count.
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), EncodeError> {
        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(height), self.max_height)?;
        within(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), EncodeError> {
        within("allocation of", bytes as u64, self.max_memory_bytes)
    }
}

fn within(what: &str, value: u64, max: Option<u64>) -> Result<(), EncodeError> {
    match max {
        Some(max) if value > max => Err(EncodeError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
