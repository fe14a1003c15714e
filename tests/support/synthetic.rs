//! Synthetic test image generation.
//!
//! Deterministic one-byte-per-pixel patterns for grayscale and indexed
//! encoding tests.

#![allow(dead_code)]

/// Solid gray image.
pub fn solid_gray(width: u32, height: u32, gray: u8) -> Vec<u8> {
    vec![gray; (width * height) as usize]
}

/// Horizontal gradient, black on the left, white on the right.
pub fn gradient_horizontal(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for _y in 0..height {
        for x in 0..width {
            pixels.push(((x * 255) / (width - 1).max(1)) as u8);
        }
    }
    pixels
}

/// Checkerboard of `cell`-pixel squares alternating between `a` and `b`.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: u8, b: u8) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let on = ((x / cell) + (y / cell)) % 2 == 0;
            pixels.push(if on { a } else { b });
        }
    }
    pixels
}

/// Indices cycling through `0..palette_len`.
pub fn index_ramp(width: u32, height: u32, palette_len: usize) -> Vec<u8> {
    (0..(width * height) as usize)
        .map(|i| (i % palette_len) as u8)
        .collect()
}

/// Red, green and blue channels for a palette of `len` distinct entries.
pub fn rainbow_channels(len: usize) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let reds = (0..len).map(|i| (i * 255 / len.max(1)) as u8).collect();
    let greens = (0..len).map(|i| 255 - (i * 255 / len.max(1)) as u8).collect();
    let blues = (0..len).map(|i| (i * 37 % 256) as u8).collect();
    (reds, greens, blues)
}
