//! Writing encoded images to a destination.
//!
//! The image is always encoded in full before the destination is touched, so
//! invalid input never produces a truncated file or a partial stream.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use super::{encode_with_options, Palette, PngOptions};
use crate::error::{Error, Result};

/// Encode and write a PNG to `writer`, returning the number of bytes written.
///
/// Nothing reaches `writer` unless encoding succeeds. A write or flush error
/// is reported as [`Error::DestinationUnavailable`]; the writer may then hold
/// a prefix of the stream, which only the caller can discard.
pub fn write_png<W: Write>(
    writer: &mut W,
    data: &[u8],
    width: u32,
    height: u32,
    palette: Option<&Palette>,
    options: &PngOptions,
) -> Result<usize> {
    let png = encode_with_options(data, width, height, palette, options)?;
    writer
        .write_all(&png)
        .and_then(|()| writer.flush())
        .map_err(|source| Error::DestinationUnavailable { path: None, source })?;
    Ok(png.len())
}

/// Encode and write a PNG file at `path`.
///
/// The file is created only after encoding succeeds. If writing fails part
/// way, the partial file is removed before the error is returned.
pub fn write_png_file<P: AsRef<Path>>(
    path: P,
    data: &[u8],
    width: u32,
    height: u32,
    palette: Option<&Palette>,
    options: &PngOptions,
) -> Result<()> {
    let png = encode_with_options(data, width, height, palette, options)?;
    write_encoded_file(path, &png)
}

/// Write an already encoded PNG to `path`.
///
/// A failed write removes the partial file before returning.
pub fn write_encoded_file<P: AsRef<Path>>(path: P, png: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::DestinationUnavailable {
        path: Some(path.to_path_buf()),
        source,
    })?;

    write_or_remove(file, png, path, |file| file.sync_all())?;
    log::debug!("png: wrote {} bytes to {}", png.len(), path.display());
    Ok(())
}

/// Write `png` into `dest`, which was opened on `path`, then run `finish`.
///
/// If either step fails, `dest` is closed and `path` is removed.
fn write_or_remove<W, F>(mut dest: W, png: &[u8], path: &Path, finish: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    let written = dest.write_all(png).and_then(|()| finish(&mut dest));
    drop(dest);

    written.map_err(|source| {
        if let Err(e) = fs::remove_file(path) {
            log::warn!("png: could not remove partial {}: {}", path.display(), e);
        }
        Error::DestinationUnavailable {
            path: Some(path.to_path_buf()),
            source,
        }
    })
}
