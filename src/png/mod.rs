//! PNG encoder implementation.
//!
//! Produces 8-bit grayscale (color type 0) or 8-bit indexed (color type 3)
//! images: signature, IHDR, PLTE when indexed, IDAT, IEND. Every row uses
//! filter type None and the scanlines are compressed as a single zlib stream.

pub mod chunk;
pub mod filter;
pub mod palette;
pub mod write;

use std::num::NonZeroUsize;

pub use chunk::{Chunk, PNG_SIGNATURE};
pub use palette::Palette;
pub use write::{write_encoded_file, write_png, write_png_file};

use crate::color::ColorType;
use crate::compress::deflate::{self, deflate_zlib};
use crate::error::{Error, Result};

/// Maximum width or height a PNG may declare (2^31 - 1).
pub const MAX_DIMENSION: u32 = 0x7FFF_FFFF;

/// PNG encoding options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngOptions {
    /// Compression level (0-9, default 3).
    pub compression_level: u8,
    /// Maximum payload of one IDAT chunk. `None` writes a single IDAT.
    pub idat_chunk_size: Option<NonZeroUsize>,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            compression_level: deflate::DEFAULT_LEVEL,
            idat_chunk_size: None,
        }
    }
}

impl PngOptions {
    /// Fastest compressing preset (level 1).
    pub fn fast() -> Self {
        Self {
            compression_level: 1,
            ..Self::default()
        }
    }

    /// Balanced preset (level 6).
    pub fn balanced() -> Self {
        Self {
            compression_level: 6,
            ..Self::default()
        }
    }

    /// Smallest output, slowest (level 9).
    pub fn max_compression() -> Self {
        Self {
            compression_level: 9,
            ..Self::default()
        }
    }

    /// Set the compression level.
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level;
        self
    }

    /// Split IDAT payloads into chunks of at most `size` bytes.
    pub fn with_idat_chunk_size(mut self, size: NonZeroUsize) -> Self {
        self.idat_chunk_size = Some(size);
        self
    }
}

/// Encode pixel data as PNG with default options.
///
/// Without a palette `data` holds gray levels; with one it holds palette
/// indices. Either way it is `width * height` bytes in row-major order.
pub fn encode(
    data: &[u8],
    width: u32,
    height: u32,
    palette: Option<&Palette>,
) -> Result<Vec<u8>> {
    encode_with_options(data, width, height, palette, &PngOptions::default())
}

/// Encode 8-bit grayscale pixel data as PNG.
pub fn encode_gray(data: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    encode(data, width, height, None)
}

/// Encode palette indices as an indexed-color PNG.
pub fn encode_indexed(
    data: &[u8],
    width: u32,
    height: u32,
    palette: &Palette,
) -> Result<Vec<u8>> {
    encode(data, width, height, Some(palette))
}

/// Encode pixel data as PNG with custom options.
pub fn encode_with_options(
    data: &[u8],
    width: u32,
    height: u32,
    palette: Option<&Palette>,
    options: &PngOptions,
) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    encode_into(&mut output, data, width, height, palette, options)?;
    Ok(output)
}

/// Encode from raw palette channels, any of which may be absent.
///
/// Checks run in order: options, dimensions, buffer length, palette. All
/// three channels absent encodes grayscale; a partial set is rejected with
/// [`Error::PaletteLengthMismatch`].
pub fn encode_channels(
    data: &[u8],
    width: u32,
    height: u32,
    reds: Option<&[u8]>,
    greens: Option<&[u8]>,
    blues: Option<&[u8]>,
    options: &PngOptions,
) -> Result<Vec<u8>> {
    validate_options(options)?;
    validate_image(data, width, height)?;
    let palette = Palette::from_optional_channels(reds, greens, blues)?;
    encode_with_options(data, width, height, palette.as_ref(), options)
}

/// Encode pixel data as PNG into a caller-provided buffer.
///
/// `output` is cleared first. On success it holds the complete PNG; on error
/// it is left empty. Reusing the buffer keeps its allocation across encodes.
///
/// Checks run in order and the first failure is returned: the options'
/// compression level, then dimensions, then buffer length, then palette
/// indices. An out-of-range level is reported even when the image itself is
/// also invalid.
pub fn encode_into(
    output: &mut Vec<u8>,
    data: &[u8],
    width: u32,
    height: u32,
    palette: Option<&Palette>,
    options: &PngOptions,
) -> Result<()> {
    output.clear();

    validate_options(options)?;
    validate_image(data, width, height)?;
    if let Some(palette) = palette {
        palette.check_indices(data)?;
    }

    let chunks = build_chunks(data, width, height, palette, options)?;
    chunk::assemble_into(output, &chunks)?;

    log::debug!(
        "png: encoded {}x{} {:?} at level {} ({} chunks, {} bytes)",
        width,
        height,
        ColorType::for_palette(palette.is_some()),
        options.compression_level,
        chunks.len(),
        output.len()
    );
    Ok(())
}

/// Build the chunk sequence for validated input.
fn build_chunks(
    data: &[u8],
    width: u32,
    height: u32,
    palette: Option<&Palette>,
    options: &PngOptions,
) -> Result<Vec<Chunk>> {
    let color_type = ColorType::for_palette(palette.is_some());

    let filtered = filter::apply_filters(data, width, height)?;
    let compressed = deflate_zlib(&filtered, options.compression_level)?;
    drop(filtered);

    let idat = chunk::idat(&compressed, options.idat_chunk_size)?;

    let mut chunks = Vec::with_capacity(idat.len() + 3);
    chunks.push(chunk::ihdr(width, height, color_type));
    if let Some(palette) = palette {
        chunks.push(chunk::plte(palette)?);
    }
    for c in &idat {
        log::trace!("png: IDAT {} bytes, crc {:08x}", c.data().len(), c.crc());
    }
    chunks.extend(idat);
    chunks.push(chunk::iend());
    Ok(chunks)
}

fn validate_options(options: &PngOptions) -> Result<()> {
    deflate::validate_level(options.compression_level)
}

/// Dimension and buffer-length checks, in that order.
fn validate_image(data: &[u8], width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::ImageTooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }

    let expected = u64::from(width) * u64::from(height);
    if data.len() as u64 != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
