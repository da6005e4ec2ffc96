//! Luma-weighted grayscale conversion.

use crate::decode::{PhotoImage, PixelLayout};
use crate::luminance::calculate_luma_u8;

/// Convert an image to a single-channel gray buffer.
///
/// RGB pixels are reduced with BT.601 weights (`0.299 R + 0.587 G + 0.114 B`).
/// A gray input is returned as a copy.
pub fn grayscale(image: &PhotoImage) -> PhotoImage {
    let pixels = match image.layout {
        PixelLayout::Gray => image.pixels.clone(),
        PixelLayout::Rgb => image
            .pixels
            .chunks_exact(3)
            .map(|p| calculate_luma_u8(p[0], p[1], p[2]))
            .collect(),
    };

    PhotoImage {
        width: image.width,
        height: image.height,
        layout: PixelLayout::Gray,
        pixels,
    }
}
