//! # fastpng
//!
//! A small, fast PNG encoder for 8-bit grayscale and 8-bit palette images.
//!
//! The encoder validates its input, prefixes every scanline with the None
//! filter, compresses the result as one zlib stream and frames it into
//! IHDR / PLTE / IDAT / IEND chunks with CRC32 checksums.
//!
//! ## Features
//!
//! - **Grayscale** output (PNG color type 0) when no palette is given
//! - **Indexed color** output (PNG color type 3) with up to 256 entries
//! - Typed errors for every rejected input; nothing is written on failure
//! - Streams to any `std::io::Write` or straight to a file
//!
//! ## Example
//!
//! ```rust
//! use fastpng::png::{self, Palette};
//!
//! // 2x1 grayscale
//! let gray = png::encode_gray(&[0, 255], 2, 1).unwrap();
//! assert_eq!(&gray[..8], &png::PNG_SIGNATURE);
//!
//! // 2x1 indexed: red, blue
//! let palette = Palette::from_channels(&[255, 0], &[0, 0], &[0, 255]).unwrap();
//! let indexed = png::encode_indexed(&[0, 1], 2, 1, &palette).unwrap();
//! assert_eq!(indexed[25], 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod compress;
pub mod error;
pub mod png;

pub use color::ColorType;
pub use error::{Error, Result};
pub use png::{Palette, PngOptions};
