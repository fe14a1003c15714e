//! Minimal PNG chunk walker for structural checks.
//!
//! Only splits the stream into chunks; pixel decoding is left to the `png`
//! and `image` crates.

#![allow(dead_code)]

/// PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// One chunk as found in the stream.
#[derive(Debug, Clone)]
pub struct RawChunk {
    pub chunk_type: [u8; 4],
    pub data: Vec<u8>,
    pub crc: u32,
}

impl RawChunk {
    pub fn type_str(&self) -> &str {
        std::str::from_utf8(&self.chunk_type).unwrap()
    }
}

/// Split a PNG stream into chunks. Panics on a malformed stream.
pub fn read_chunks(png: &[u8]) -> Vec<RawChunk> {
    assert_eq!(&png[..8], &SIGNATURE, "bad signature");
    let mut pos = 8;
    let mut chunks = Vec::new();

    while pos < png.len() {
        assert!(pos + 12 <= png.len(), "truncated chunk header at {pos}");
        let len = u32::from_be_bytes(png[pos..pos + 4].try_into().unwrap()) as usize;
        let chunk_type: [u8; 4] = png[pos + 4..pos + 8].try_into().unwrap();
        let data_end = pos + 8 + len;
        assert!(data_end + 4 <= png.len(), "truncated chunk data at {pos}");
        let data = png[pos + 8..data_end].to_vec();
        let crc = u32::from_be_bytes(png[data_end..data_end + 4].try_into().unwrap());
        chunks.push(RawChunk {
            chunk_type,
            data,
            crc,
        });
        pos = data_end + 4;
    }

    chunks
}

/// Chunk type tags in stream order.
pub fn chunk_types(png: &[u8]) -> Vec<String> {
    read_chunks(png)
        .iter()
        .map(|c| c.type_str().to_string())
        .collect()
}

/// Concatenated IDAT payloads.
pub fn idat_stream(png: &[u8]) -> Vec<u8> {
    read_chunks(png)
        .into_iter()
        .filter(|c| &c.chunk_type == b"IDAT")
        .flat_map(|c| c.data)
        .collect()
}
