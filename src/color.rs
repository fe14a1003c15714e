//! Color type definitions.
//!
//! Every image is 8 bits per sample. The color type is never chosen by the
//! caller directly: it follows from whether a palette accompanies the pixels.

/// Supported PNG color types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorType {
    /// Grayscale, 1 byte per pixel.
    Gray,
    /// Palette index, 1 byte per pixel.
    Indexed,
}

impl ColorType {
    /// Derive the color type from the presence of a palette.
    #[inline]
    pub const fn for_palette(has_palette: bool) -> Self {
        if has_palette {
            ColorType::Indexed
        } else {
            ColorType::Gray
        }
    }

    /// Returns the PNG color type value written to IHDR.
    #[inline]
    pub const fn png_color_type(self) -> u8 {
        match self {
            ColorType::Gray => 0,
            ColorType::Indexed => 3,
        }
    }

    /// Returns the bit depth for PNG encoding.
    #[inline]
    pub const fn png_bit_depth(self) -> u8 {
        8 // We only support 8-bit depth
    }
}
