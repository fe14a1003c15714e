//! Error types for the fastpng library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fastpng operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding or writing a PNG.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image dimensions (zero width or height).
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
    /// Image dimensions exceed the PNG limit.
    #[error("Image {width}x{height} exceeds maximum dimension {max}")]
    ImageTooLarge {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
        /// Maximum supported dimension.
        max: u32,
    },
    /// Pixel buffer length doesn't match `width * height`.
    #[error("Pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch {
        /// Expected number of bytes (`width * height`).
        expected: u64,
        /// Actual number of bytes provided.
        actual: usize,
    },
    /// Palette channels have different lengths, or only some were supplied.
    ///
    /// An absent channel is reported as `None`.
    #[error("Palette channel length mismatch: reds={reds:?}, greens={greens:?}, blues={blues:?}")]
    PaletteLengthMismatch {
        /// Length of the red channel.
        reds: Option<usize>,
        /// Length of the green channel.
        greens: Option<usize>,
        /// Length of the blue channel.
        blues: Option<usize>,
    },
    /// Palette has more entries than an 8-bit index can address.
    #[error("Palette has {len} entries, maximum is 256")]
    PaletteTooLarge {
        /// Number of entries supplied.
        len: usize,
    },
    /// Palette has no entries.
    #[error("Palette must contain at least one entry")]
    EmptyPalette,
    /// A pixel refers to a palette entry that doesn't exist.
    #[error("Pixel index {index} out of range for palette of {palette_len} entries")]
    PaletteIndexOutOfRange {
        /// Offending pixel value.
        index: u8,
        /// Number of palette entries.
        palette_len: usize,
    },
    /// Invalid compression level (must be 0-9).
    #[error("Invalid compression level {0}: must be 0-9")]
    InvalidCompressionLevel(u8),
    /// A working buffer could not be allocated.
    #[error("Failed to allocate {bytes} bytes for {what}")]
    AllocationFailure {
        /// Which buffer was being allocated.
        what: &'static str,
        /// Requested size in bytes.
        bytes: usize,
    },
    /// The output destination could not be opened or written.
    #[error("{}", destination_message(.path))]
    DestinationUnavailable {
        /// Path of the destination, if it is a file.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The DEFLATE backend reported an error.
    #[error("Compression error: {0}")]
    CompressionFailure(#[source] io::Error),
}

fn destination_message(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!("Cannot write PNG to {}", path.display()),
        None => "Cannot write PNG to output stream".to_string(),
    }
}

impl Error {
    /// Reserve `additional` bytes in `buf`, mapping failure to [`Error::AllocationFailure`].
    pub(crate) fn try_reserve(
        buf: &mut Vec<u8>,
        additional: usize,
        what: &'static str,
    ) -> Result<()> {
        buf.try_reserve_exact(additional)
            .map_err(|_| Error::AllocationFailure {
                what,
                bytes: additional,
            })
    }
}
