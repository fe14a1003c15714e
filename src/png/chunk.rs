//! PNG chunk construction and stream assembly.
//!
//! A chunk on disk is: 4-byte big-endian data length, 4-byte type tag, data,
//! 4-byte big-endian CRC32 over type + data.

use std::num::NonZeroUsize;

use super::palette::Palette;
use crate::color::ColorType;
use crate::compress::crc32::chunk_crc;
use crate::error::{Error, Result};

/// PNG file signature (magic bytes).
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest data length a chunk may declare (2^31 - 1).
pub const MAX_CHUNK_DATA: usize = 0x7FFF_FFFF;

/// Bytes of framing around each chunk's data (length + type + CRC).
pub const CHUNK_OVERHEAD: usize = 12;

/// A framed PNG chunk. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    chunk_type: [u8; 4],
    data: Vec<u8>,
    crc: u32,
}

impl Chunk {
    /// Build a chunk and compute its CRC.
    ///
    /// `data` must not exceed [`MAX_CHUNK_DATA`] bytes. Only the builders in
    /// this module construct chunks, and each of them bounds its payload.
    pub(crate) fn new(chunk_type: [u8; 4], data: Vec<u8>) -> Self {
        debug_assert!(data.len() <= MAX_CHUNK_DATA);
        let crc = chunk_crc(&chunk_type, &data);
        Self {
            chunk_type,
            data,
            crc,
        }
    }

    /// The 4-byte ASCII type tag.
    pub fn chunk_type(&self) -> &[u8; 4] {
        &self.chunk_type
    }

    /// Chunk payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// CRC32 over type + data.
    pub fn crc(&self) -> u32 {
        self.crc
    }

    /// Size of the chunk once serialized, framing included.
    pub fn encoded_len(&self) -> usize {
        CHUNK_OVERHEAD + self.data.len()
    }

    /// Append the serialized chunk to `output`.
    pub fn write_to(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&(self.data.len() as u32).to_be_bytes());
        output.extend_from_slice(&self.chunk_type);
        output.extend_from_slice(&self.data);
        output.extend_from_slice(&self.crc.to_be_bytes());
    }
}

/// Concatenate the PNG signature and `chunks` into a new buffer.
pub fn assemble(chunks: &[Chunk]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    assemble_into(&mut output, chunks)?;
    Ok(output)
}

/// Clear `output` and fill it with the PNG signature followed by `chunks`.
///
/// The whole stream is reserved up front, so on error `output` is left empty.
pub fn assemble_into(output: &mut Vec<u8>, chunks: &[Chunk]) -> Result<()> {
    output.clear();
    let total = PNG_SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();
    Error::try_reserve(output, total, "PNG stream")?;

    output.extend_from_slice(&PNG_SIGNATURE);
    for chunk in chunks {
        chunk.write_to(output);
    }
    debug_assert_eq!(output.len(), total);
    Ok(())
}

/// IHDR: dimensions, bit depth 8, color type, and zeroed method bytes.
pub fn ihdr(width: u32, height: u32, color_type: ColorType) -> Chunk {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(color_type.png_bit_depth());
    data.push(color_type.png_color_type());
    data.push(0); // compression: deflate
    data.push(0); // filter method 0
    data.push(0); // no interlace
    Chunk::new(*b"IHDR", data)
}

/// PLTE: three bytes per palette entry.
pub fn plte(palette: &Palette) -> Result<Chunk> {
    Ok(Chunk::new(*b"PLTE", palette.to_plte_bytes()?))
}

/// IDAT chunks carrying the zlib stream.
///
/// With `max_chunk_size` unset the stream goes into a single chunk unless it
/// exceeds [`MAX_CHUNK_DATA`]. An empty stream still yields one IDAT.
pub fn idat(compressed: &[u8], max_chunk_size: Option<NonZeroUsize>) -> Result<Vec<Chunk>> {
    let limit = max_chunk_size.map_or(MAX_CHUNK_DATA, |n| n.get().min(MAX_CHUNK_DATA));

    if compressed.is_empty() {
        return Ok(vec![Chunk::new(*b"IDAT", Vec::new())]);
    }

    let mut chunks = Vec::with_capacity(compressed.len().div_ceil(limit));
    for part in compressed.chunks(limit) {
        let mut data = Vec::new();
        Error::try_reserve(&mut data, part.len(), "IDAT chunk")?;
        data.extend_from_slice(part);
        chunks.push(Chunk::new(*b"IDAT", data));
    }
    Ok(chunks)
}

/// IEND: empty terminator.
pub fn iend() -> Chunk {
    Chunk::new(*b"IEND", Vec::new())
}
