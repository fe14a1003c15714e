//! Scanline filtering.
//!
//! Every row gets filter type 0 (None): the filter byte followed by the row's
//! bytes unchanged. No prediction is applied.

use crate::error::{Error, Result};

/// Filter type byte for the None filter.
pub const FILTER_NONE: u8 = 0;

/// Length of the filtered stream for an image of one byte per pixel.
///
/// Returns `None` if the size doesn't fit in `usize`.
pub fn filtered_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_add(1)?
        .checked_mul(height as usize)
}

/// Prefix each row of `data` with its filter byte.
///
/// `data` must hold exactly `width * height` bytes. The result is one
/// contiguous buffer of `height * (width + 1)` bytes.
pub fn apply_filters(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let expected = u64::from(width) * u64::from(height);
    if data.len() as u64 != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: data.len(),
        });
    }
    let row_bytes = width as usize;

    let total = filtered_len(width, height).ok_or(Error::AllocationFailure {
        what: "filtered scanlines",
        bytes: usize::MAX,
    })?;
    let mut output = Vec::new();
    Error::try_reserve(&mut output, total, "filtered scanlines")?;

    for row in data.chunks_exact(row_bytes) {
        output.push(FILTER_NONE);
        output.extend_from_slice(row);
    }

    debug_assert_eq!(output.len(), total);
    Ok(output)
}
