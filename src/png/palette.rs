//! Palette construction for indexed-color output.
//!
//! A palette is built from three channel arrays of equal length. Entry `i`
//! is `(reds[i], greens[i], blues[i])` and is the color of pixel value `i`.
//! Channel values are taken as-is: no clamping, no deduplication.

use crate::error::{Error, Result};

/// Maximum number of entries addressable by an 8-bit index.
pub const MAX_PALETTE_ENTRIES: usize = 256;

/// An ordered color table of 1 to 256 RGB entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<[u8; 3]>,
}

impl Palette {
    /// Build a palette from three channel arrays.
    ///
    /// Fails with [`Error::PaletteLengthMismatch`] if the lengths differ,
    /// [`Error::EmptyPalette`] if they are empty, and
    /// [`Error::PaletteTooLarge`] above 256 entries.
    pub fn from_channels(reds: &[u8], greens: &[u8], blues: &[u8]) -> Result<Self> {
        if reds.len() != greens.len() || reds.len() != blues.len() {
            return Err(Error::PaletteLengthMismatch {
                reds: Some(reds.len()),
                greens: Some(greens.len()),
                blues: Some(blues.len()),
            });
        }
        check_len(reds.len())?;
        build(reds, greens, blues)
    }

    /// Build a palette from channels that may each be absent.
    ///
    /// All three absent means no palette. Some but not all present is an
    /// error, never a fallback to grayscale.
    pub fn from_optional_channels(
        reds: Option<&[u8]>,
        greens: Option<&[u8]>,
        blues: Option<&[u8]>,
    ) -> Result<Option<Self>> {
        match (reds, greens, blues) {
            (None, None, None) => Ok(None),
            (Some(r), Some(g), Some(b)) => Self::from_channels(r, g, b).map(Some),
            (r, g, b) => Err(Error::PaletteLengthMismatch {
                reds: r.map(<[u8]>::len),
                greens: g.map(<[u8]>::len),
                blues: b.map(<[u8]>::len),
            }),
        }
    }

    /// Build a palette from RGB triples.
    pub fn from_entries(entries: Vec<[u8; 3]>) -> Result<Self> {
        check_len(entries.len())?;
        Ok(Self { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The RGB triples in index order.
    pub fn entries(&self) -> &[[u8; 3]] {
        &self.entries
    }

    /// Check that every pixel value in `indices` has a palette entry.
    pub fn check_indices(&self, indices: &[u8]) -> Result<()> {
        // A full palette covers every u8.
        if self.entries.len() == MAX_PALETTE_ENTRIES {
            return Ok(());
        }
        match indices.iter().copied().find(|&i| i as usize >= self.entries.len()) {
            Some(index) => Err(Error::PaletteIndexOutOfRange {
                index,
                palette_len: self.entries.len(),
            }),
            None => Ok(()),
        }
    }

    /// PLTE payload: `r, g, b` for each entry.
    pub fn to_plte_bytes(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        Error::try_reserve(&mut data, self.entries.len() * 3, "palette table")?;
        for entry in &self.entries {
            data.extend_from_slice(entry);
        }
        Ok(data)
    }
}

fn check_len(len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptyPalette);
    }
    if len > MAX_PALETTE_ENTRIES {
        return Err(Error::PaletteTooLarge { len });
    }
    Ok(())
}

/// Zip validated channels into entries.
fn build(reds: &[u8], greens: &[u8], blues: &[u8]) -> Result<Palette> {
    assert!(
        reds.len() == greens.len() && reds.len() == blues.len(),
        "palette channels must have equal length"
    );

    let mut entries = Vec::new();
    entries
        .try_reserve_exact(reds.len())
        .map_err(|_| Error::AllocationFailure {
            what: "palette table",
            bytes: reds.len() * 3,
        })?;
    entries.extend(
        reds.iter()
            .zip(greens)
            .zip(blues)
            .map(|((&r, &g), &b)| [r, g, b]),
    );
    Ok(Palette { entries })
}
