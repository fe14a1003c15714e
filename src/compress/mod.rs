//! Checksums and compression used by the PNG encoder.

pub mod crc32;
pub mod deflate;

pub use crc32::{chunk_crc, crc32, Crc32};
pub use deflate::deflate_zlib;
