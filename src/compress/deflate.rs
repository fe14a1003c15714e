//! zlib-wrapped DEFLATE (RFC 1950 / RFC 1951) for IDAT payloads.
//!
//! Backed by `flate2`. The output is a complete zlib stream: 2-byte header,
//! deflate blocks, Adler-32 trailer.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{Error, Result};

/// Highest accepted compression level.
pub const MAX_LEVEL: u8 = 9;

/// Compression level used when the caller doesn't pick one.
///
/// Favors encode speed over ratio.
pub const DEFAULT_LEVEL: u8 = 3;

/// Check that `level` is in `0..=9`.
pub fn validate_level(level: u8) -> Result<()> {
    if level > MAX_LEVEL {
        return Err(Error::InvalidCompressionLevel(level));
    }
    Ok(())
}

/// Compress `data` into a zlib stream at `level` (0 = stored, 9 = smallest).
///
/// Deterministic: the same input and level always yield the same bytes.
pub fn deflate_zlib(data: &[u8], level: u8) -> Result<Vec<u8>> {
    validate_level(level)?;

    let mut buf = Vec::new();
    Error::try_reserve(&mut buf, estimate_capacity(data.len(), level), "zlib stream")?;

    let mut encoder = ZlibEncoder::new(buf, Compression::new(u32::from(level)));
    encoder
        .write_all(data)
        .map_err(Error::CompressionFailure)?;
    let compressed = encoder.finish().map_err(Error::CompressionFailure)?;

    log::trace!(
        "deflate: level {} {} -> {} bytes",
        level,
        data.len(),
        compressed.len()
    );
    Ok(compressed)
}

/// Initial output capacity guess. Stored blocks add 5 bytes per 64 KiB
/// block; compressed output is usually much smaller than the input.
fn estimate_capacity(input_len: usize, level: u8) -> usize {
    if level == 0 {
        input_len + input_len / 65_535 * 5 + 16
    } else {
        input_len / 2 + 64
    }
}
