//! PNG encoding for export and for the remote assistant payload.
//!
//! This module provides PNG encoding using the `image` crate's PNG encoder.
//! RGB buffers encode as RGB8 and gray buffers as L8, so a grayscale edit
//! round-trips as a single-channel file.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::{PhotoImage, PixelLayout};

/// File name offered for the edited image download.
pub const EXPORT_FILE_NAME: &str = "edited_image.png";

/// MIME type of the exported image.
pub const EXPORT_MIME_TYPE: &str = "image/png";

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * channels), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an image buffer to PNG bytes.
///
/// # Errors
///
/// Returns an error if the image has a zero dimension, if its buffer doesn't
/// match its dimensions, or if the encoder fails.
///
/// # Example
///
/// ```ignore
/// use glint_core::decode::PhotoImage;
/// use glint_core::encode::encode_png;
///
/// let image = PhotoImage::filled(100, 100, [128, 128, 128]);
/// let png = encode_png(&image).unwrap();
///
/// // Verify PNG signature
/// assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn encode_png(image: &PhotoImage) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width, image.height);
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * image.channels();
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    let color_type = match image.layout {
        PixelLayout::Rgb => ExtendedColorType::Rgb8,
        PixelLayout::Gray => ExtendedColorType::L8,
    };

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&image.pixels, width, height, color_type)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Encoding then decoding returns the same RGB samples.
        #[test]
        fn prop_png_is_lossless(
            (width, height) in (1u32..=24, 1u32..=24),
            seed in any::<u8>(),
        ) {
            let count = (width * height * 3) as usize;
            let pixels: Vec<u8> = (0..count).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect();
            let image = PhotoImage::new(width, height, PixelLayout::Rgb, pixels).unwrap();

            let png = encode_png(&image).unwrap();
            let decoded = image::load_from_memory(&png).unwrap().into_rgb8();

            prop_assert_eq!(decoded.dimensions(), (width, height));
            prop_assert_eq!(decoded.into_raw(), image.pixels);
        }
    }
}
